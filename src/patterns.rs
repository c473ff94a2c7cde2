//! Regex patterns for one documentation generator's HTML shape.
//!
//! The defaults match the gtk-doc style API reference shipped with libxml2.
//! Another generator can be supported by substituting these through
//! [`Config`](crate::config::Config) alone.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Inline tags the sanitizer strips, in both opening and closing form.
pub const DEFAULT_STRIPPED_TAGS: &[&str] =
    &["a", "br", "table", "tbody", "td", "tr", "tt", "span", "i", "col"];

/// One function block: heading, prototype, description paragraph and an
/// optional note div directly after it.
///
/// Groups: `name` (heading text), `rtype` (first prototype token), `note`
/// (inner text of the note div, if any).
pub const DEFAULT_BLOCK_PATTERN: &str = concat!(
    r"Function: (?P<name>[^<]*)</h3>",
    r#"<pre class="programlisting">\s*(?P<rtype>[^\s<]*)[^<]*</pre>"#,
    r"<p>[^<]*</p>\r?\n",
    r"(?:<div[^>]*>(?P<note>[^<]*)</div>)?",
);

/// A space or colon, then a possibly negative integer ending on a word boundary.
/// The boundary is ASCII-only, so `-5é` still yields `-5`.
pub const DEFAULT_SENTINEL_PATTERN: &str = r"[ :](?P<value>-?[0-9]+)(?-u:\b)";

#[derive(Debug, Clone)]
pub struct Patterns {
    /// `None` when no tags are configured for stripping.
    pub stripped_tags: Option<Regex>,
    pub block: Regex,
    pub sentinel: Regex,
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern { name, source })
}

fn require_group(re: &Regex, pattern: &'static str, group: &'static str) -> Result<()> {
    if re.capture_names().flatten().any(|n| n == group) {
        Ok(())
    } else {
        Err(Error::MissingGroup { pattern, group })
    }
}

/// Builds `</?(?:a|br|...)\b[^>]*>`; the word boundary keeps `<abbr>` or
/// `<img>` from matching the `a` and `i` entries.
fn tag_pattern(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let alternation = tags
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Some(format!(r"</?(?:{})\b[^>]*>", alternation))
}

impl Patterns {
    pub fn compile(config: &Config) -> Result<Patterns> {
        let stripped_tags = match tag_pattern(&config.stripped_tags) {
            Some(p) => Some(compile("tag", &p)?),
            None => None,
        };

        let block = compile("block", &config.block_pattern)?;
        for group in ["name", "rtype", "note"] {
            require_group(&block, "block", group)?;
        }

        let sentinel = compile("sentinel", &config.sentinel_pattern)?;
        require_group(&sentinel, "sentinel", "value")?;

        Ok(Patterns {
            stripped_tags,
            block,
            sentinel,
        })
    }
}
