use regex::{NoExpand, Regex};
use std::sync::OnceLock;

use super::interpolation::MATCH_ANY;

fn metacharacter_regex() -> &'static Regex {
    static METACHARACTER_REGEX: OnceLock<Regex> = OnceLock::new();
    METACHARACTER_REGEX.get_or_init(|| {
        Regex::new(r"[.*+?^${}<>()|\[\]\\]").expect("metacharacter regex should compile")
    })
}

fn escaped_wildcard_regex() -> &'static Regex {
    static ESCAPED_WILDCARD_REGEX: OnceLock<Regex> = OnceLock::new();
    ESCAPED_WILDCARD_REGEX.get_or_init(|| {
        Regex::new(r"\\\(\\\.\\\*\\\?\\\)").expect("escaped wildcard regex should compile")
    })
}

/// Backslash-escapes every regex metacharacter, then restores each
/// [`MATCH_ANY`] marker so it keeps working as a wildcard.
pub fn escape_regex(name: &str) -> String {
    let escaped = metacharacter_regex().replace_all(name, r"\${0}");
    escaped_wildcard_regex()
        .replace_all(&escaped, NoExpand(MATCH_ANY))
        .into_owned()
}
