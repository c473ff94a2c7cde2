use clap::{CommandFactory, Parser};
use sentinelgen::config::Config;
use sentinelgen::Error;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "sentinelgen",
    about = "Tabulate the documented error return values of a C API as C source"
)]
struct Cli {
    /// HTML API reference document
    document: Option<PathBuf>,

    /// Config file path (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Apply NFKC and line-ending normalization to the document first
    #[arg(long)]
    normalize: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let Some(document) = cli.document else {
        println!("{}", Cli::command().render_usage());
        return;
    };

    let mut config = match cli.config {
        Some(ref path) => Config::load(path).unwrap_or_else(|e| die(&e.to_string())),
        None => Config::default(),
    };
    if cli.normalize {
        config.normalize = true;
    }

    let text = match sentinelgen::load::load_document(&document) {
        Ok(text) => text,
        Err(e @ Error::Unreadable { .. }) => {
            log::debug!("{:?}", e);
            println!("{}", e);
            return;
        }
        Err(e) => die(&e.to_string()),
    };

    let result = sentinelgen::generate(&text, &config).unwrap_or_else(|e| die(&e.to_string()));
    print!("{}", result);
}
