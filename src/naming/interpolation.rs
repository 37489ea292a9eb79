use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// Non-greedy "match anything" marker substituted for every placeholder.
pub const MATCH_ANY: &str = "(.*?)";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| {
        // `$var`, `${var}` and printf-style `%s`, `%d`, ..., `%%`.
        Regex::new(r"(?i)(\$\{?[A-Za-z0-9_]+\}?|%[psdifjo#%])")
            .expect("placeholder regex should compile")
    })
}

/// Replaces template variables and printf-style specifiers with [`MATCH_ANY`].
pub fn resolve_interpolation(name: &str) -> String {
    placeholder_regex()
        .replace_all(name, NoExpand(MATCH_ANY))
        .into_owned()
}
