use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBlock {
    pub name: String,
    pub return_type: String,
    pub annotation: Option<String>,
}

/// A return value the documentation ties to failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentinel {
    /// Integer as written in the documentation, sign included.
    Code(String),
    Null,
    /// The catch-all `-1` for "negative value on failure".
    Generic,
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::Code(code) => f.write_str(code),
            Sentinel::Null => f.write_str("NULL"),
            Sentinel::Generic => f.write_str("-1"),
        }
    }
}

/// Function name to sentinels, in first-appearance order.
pub type ResultTable = IndexMap<String, Vec<Sentinel>>;

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub table: ResultTable,
    /// `void` functions that carried no annotation.
    pub void_count: usize,
}
