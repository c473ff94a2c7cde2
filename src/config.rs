use crate::error::{Error, Result};
use crate::patterns::{DEFAULT_BLOCK_PATTERN, DEFAULT_SENTINEL_PATTERN, DEFAULT_STRIPPED_TAGS};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inline tags removed before block matching, opening and closing forms.
    pub stripped_tags: Vec<String>,

    pub block_pattern: String,

    pub sentinel_pattern: String,

    /// Functions whose name contains any of these are never analyzed.
    pub excluded_names: Vec<String>,

    /// Name fragments marking boolean predicates (`xmlHasProp`, `xmlIsBlank`).
    pub predicate_markers: Vec<String>,

    pub returns_marker: String,

    pub unbounded_phrase: String,

    pub generic_fail_phrase: String,

    pub pointer_suffix: String,

    pub header: String,

    pub array_suffix: String,

    pub struct_type: String,

    pub table_name: String,

    pub terminator: i64,

    pub normalize: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stripped_tags: strings(DEFAULT_STRIPPED_TAGS),
            block_pattern: DEFAULT_BLOCK_PATTERN.to_string(),
            sentinel_pattern: DEFAULT_SENTINEL_PATTERN.to_string(),
            excluded_names: strings(&["UCSI"]),
            predicate_markers: strings(&["Has", "Is"]),
            returns_marker: "Returns".to_string(),
            unbounded_phrase: "a positive error code".to_string(),
            generic_fail_phrase: "negative value on fail".to_string(),
            pointer_suffix: "Ptr".to_string(),
            header: "std_errors_head.h".to_string(),
            array_suffix: "_man_errors".to_string(),
            struct_type: "sys_errors".to_string(),
            table_name: "errors_man".to_string(),
            terminator: 12345,
            normalize: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
