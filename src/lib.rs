pub mod blocks;
pub mod config;
pub mod emit;
pub mod error;
pub mod ir;
pub mod load;
pub mod patterns;
pub mod sanitize;
pub mod sentinels;

use config::Config;
pub use error::{Error, Result};
use patterns::Patterns;

/// Turns an API reference document into the C sentinel table.
pub fn generate(text: &str, config: &Config) -> Result<String> {
    let patterns = Patterns::compile(config)?;

    // Stage 0
    let text = if config.normalize {
        load::normalize(text)
    } else {
        text.to_string()
    };

    // Stage 1
    let text = sanitize::strip_tags(&text, patterns.stripped_tags.as_ref());

    // Stage 2
    let blocks = blocks::extract_blocks(&text, &patterns.block, config);
    if blocks.is_empty() {
        log::warn!("no function blocks found in document");
    }

    // Stage 3
    let extraction = sentinels::collect(&blocks, &patterns.sentinel, config);

    // Stage 4
    let output = emit::emit_c(&extraction, config);

    let mut result = output.join("\n");
    result.push('\n');
    Ok(result)
}
