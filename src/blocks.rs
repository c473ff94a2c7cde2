use crate::config::Config;
use crate::ir::FunctionBlock;
use regex::Regex;

fn is_excluded(name: &str, config: &Config) -> bool {
    config.excluded_names.iter().any(|x| name.contains(x.as_str()))
}

/// Collects every function block of the sanitized document, left to right.
pub fn extract_blocks(text: &str, block: &Regex, config: &Config) -> Vec<FunctionBlock> {
    let mut out: Vec<FunctionBlock> = Vec::new();

    for caps in block.captures_iter(text) {
        let name = caps.name("name").map_or("", |m| m.as_str()).trim_end().to_string();
        let return_type = caps.name("rtype").map_or("", |m| m.as_str()).to_string();

        let annotation = if is_excluded(&name, config) {
            None
        } else {
            caps.name("note").map(|m| m.as_str().to_string())
        };

        out.push(FunctionBlock {
            name,
            return_type,
            annotation,
        });
    }

    log::debug!("matched {} function blocks", out.len());
    out
}
