//! Derives failure return values from each function's note text.
//!
//! Only the part of the note from the first `Returns` onward is considered.
//! Explicit integers win; when there are none the return type and the
//! "negative value on fail" phrase supply the fallback `NULL` / `-1`.

use crate::config::Config;
use crate::ir::{Extraction, FunctionBlock, Sentinel};
use regex::Regex;

fn is_predicate(name: &str, config: &Config) -> bool {
    config
        .predicate_markers
        .iter()
        .any(|m| name.contains(m.as_str()))
}

/// Sentinels for one block, or `None` when the note carries no return
/// description at all.
pub fn block_sentinels(
    block: &FunctionBlock,
    sentinel: &Regex,
    config: &Config,
) -> Option<Vec<Sentinel>> {
    let annotation = block.annotation.as_deref().filter(|a| !a.is_empty())?;
    let start = annotation.find(config.returns_marker.as_str())?;
    let returns_substring = &annotation[start..];

    let mut values: Vec<Sentinel> = Vec::new();
    if returns_substring.contains(config.unbounded_phrase.as_str()) {
        return Some(values);
    }

    for caps in sentinel.captures_iter(returns_substring) {
        if let Some(m) = caps.name("value") {
            values.push(Sentinel::Code(m.as_str().to_string()));
        }
    }
    let match_count = values.len();

    if match_count == 0 {
        if block.return_type.ends_with(config.pointer_suffix.as_str()) {
            values.push(Sentinel::Null);
        }
        if returns_substring.contains(config.generic_fail_phrase.as_str()) {
            values.push(Sentinel::Generic);
        }
    } else if match_count == 1 && is_predicate(&block.name, config) {
        values.push(Sentinel::Code("0".to_string()));
    }

    Some(values)
}

pub fn collect(blocks: &[FunctionBlock], sentinel: &Regex, config: &Config) -> Extraction {
    let mut extraction = Extraction::default();

    for block in blocks {
        let has_annotation = block.annotation.as_deref().is_some_and(|a| !a.is_empty());
        if !has_annotation && block.return_type == "void" {
            extraction.void_count += 1;
        }

        let values = match block_sentinels(block, sentinel, config) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        extraction
            .table
            .entry(block.name.clone())
            .or_default()
            .extend(values);
    }

    log::debug!(
        "recorded sentinels for {} functions, {} void functions without annotation",
        extraction.table.len(),
        extraction.void_count
    );
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Patterns;

    fn block(name: &str, rtype: &str, note: Option<&str>) -> FunctionBlock {
        FunctionBlock {
            name: name.to_string(),
            return_type: rtype.to_string(),
            annotation: note.map(|n| n.to_string()),
        }
    }

    fn run(blocks: &[FunctionBlock]) -> Extraction {
        let config = Config::default();
        let patterns = Patterns::compile(&config).unwrap();
        collect(blocks, &patterns.sentinel, &config)
    }

    fn values(extraction: &Extraction, name: &str) -> Option<Vec<String>> {
        extraction
            .table
            .get(name)
            .map(|v| v.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_explicit_code_suppresses_generic_fallback() {
        let ex = run(&[block(
            "xmlDoThing",
            "int",
            Some("Returns a negative value on fail or the following codes: -5"),
        )]);
        assert_eq!(values(&ex, "xmlDoThing"), Some(vec!["-5".to_string()]));
    }

    #[test]
    fn test_predicate_single_code_adds_zero() {
        let ex = run(&[block("xmlHasProp", "int", Some("Returns: 1"))]);
        assert_eq!(
            values(&ex, "xmlHasProp"),
            Some(vec!["1".to_string(), "0".to_string()])
        );
    }

    #[test]
    fn test_is_predicate_single_code_adds_zero() {
        let ex = run(&[block("xmlIsBlankNode", "int", Some("Returns 1 if blank"))]);
        assert_eq!(
            values(&ex, "xmlIsBlankNode"),
            Some(vec!["1".to_string(), "0".to_string()])
        );
    }

    #[test]
    fn test_predicate_with_two_codes_adds_nothing() {
        let ex = run(&[block("xmlHasNsProp", "int", Some("Returns 1 or -1 on error"))]);
        assert_eq!(
            values(&ex, "xmlHasNsProp"),
            Some(vec!["1".to_string(), "-1".to_string()])
        );
    }

    #[test]
    fn test_pointer_return_without_codes() {
        let ex = run(&[block("xmlNewNode", "xmlNodePtr", Some("Returns a pointer to the new node"))]);
        assert_eq!(values(&ex, "xmlNewNode"), Some(vec!["NULL".to_string()]));
    }

    #[test]
    fn test_pointer_and_generic_fallbacks_in_order() {
        let ex = run(&[block(
            "xmlOddPtr",
            "xmlDocPtr",
            Some("Returns the doc or a negative value on failure"),
        )]);
        assert_eq!(
            values(&ex, "xmlOddPtr"),
            Some(vec!["NULL".to_string(), "-1".to_string()])
        );
    }

    #[test]
    fn test_generic_fallback_alone() {
        let ex = run(&[block("xmlSave", "int", Some("Returns a negative value on failure"))]);
        assert_eq!(values(&ex, "xmlSave"), Some(vec!["-1".to_string()]));
    }

    #[test]
    fn test_positive_error_code_short_circuits() {
        let ex = run(&[block(
            "xmlParseChunk",
            "int",
            Some("Returns zero if no error, or a positive error code, e.g. -1 or: 12"),
        )]);
        assert!(ex.table.is_empty());
    }

    #[test]
    fn test_text_before_returns_is_ignored() {
        let ex = run(&[block("f", "int", Some("Since 2 versions. Returns -3 on error"))]);
        assert_eq!(values(&ex, "f"), Some(vec!["-3".to_string()]));
    }

    #[test]
    fn test_number_needs_space_or_colon_and_boundary() {
        let ex = run(&[block("f", "int", Some("Returns x-2, (4), 10abc and :7"))]);
        assert_eq!(values(&ex, "f"), Some(vec!["7".to_string()]));
    }

    #[test]
    fn test_non_ascii_letter_ends_number() {
        let ex = run(&[block("f", "int", Some("Returns -5\u{e9} on error"))]);
        assert_eq!(values(&ex, "f"), Some(vec!["-5".to_string()]));
    }

    #[test]
    fn test_void_without_annotation_is_tallied() {
        let ex = run(&[
            block("xmlFreeDoc", "void", None),
            block("xmlFreeNode", "void", Some("")),
            block("xmlStrlen", "int", None),
        ]);
        assert!(ex.table.is_empty());
        assert_eq!(ex.void_count, 2);
    }

    #[test]
    fn test_annotation_without_returns_is_not_tallied() {
        let ex = run(&[block("xmlFreeDoc", "void", Some("Deprecated, see xmlFree: 3"))]);
        assert!(ex.table.is_empty());
        assert_eq!(ex.void_count, 0);
    }

    #[test]
    fn test_non_pointer_without_codes_is_skipped() {
        let ex = run(&[block("xmlStrlen", "int", Some("Returns the length"))]);
        assert!(ex.table.is_empty());
    }

    #[test]
    fn test_repeated_name_appends() {
        let ex = run(&[
            block("xmlDup", "int", Some("Returns: -1")),
            block("xmlOther", "int", Some("Returns: -2")),
            block("xmlDup", "int", Some("Returns: -3")),
        ]);
        let keys: Vec<&String> = ex.table.keys().collect();
        assert_eq!(keys, vec!["xmlDup", "xmlOther"]);
        assert_eq!(
            values(&ex, "xmlDup"),
            Some(vec!["-1".to_string(), "-3".to_string()])
        );
    }

    #[test]
    fn test_duplicates_kept() {
        let ex = run(&[block("f", "int", Some("Returns -1 on error, -1 on overflow"))]);
        assert_eq!(
            values(&ex, "f"),
            Some(vec!["-1".to_string(), "-1".to_string()])
        );
    }
}
