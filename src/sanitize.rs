use regex::Regex;

pub fn strip_tags(text: &str, tags: Option<&Regex>) -> String {
    match tags {
        Some(re) => {
            let out = re.replace_all(text, "").into_owned();
            log::debug!("sanitizer removed {} bytes of markup", text.len() - out.len());
            out
        }
        None => text.to_string(),
    }
}
