use regex::Regex;
use std::sync::OnceLock;

fn name_property_regex() -> &'static Regex {
    static NAME_PROPERTY_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_PROPERTY_REGEX
        .get_or_init(|| Regex::new(r"\\\.name").expect("name property regex should compile"))
}

fn prototype_path_regex() -> &'static Regex {
    static PROTOTYPE_PATH_REGEX: OnceLock<Regex> = OnceLock::new();
    PROTOTYPE_PATH_REGEX.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_]*\\\.prototype\\\.").expect("prototype path regex should compile")
    })
}

/// Removes escaped `.name` accessors and `Word.prototype.` paths from an
/// escaped test name. Absence passes through.
pub fn strip_property_access(escaped_name: Option<&str>) -> Option<String> {
    let escaped_name = escaped_name?;
    let without_name = strip_name_property(escaped_name);
    Some(
        prototype_path_regex()
            .replace_all(&without_name, "")
            .into_owned(),
    )
}

/// Only drops `\.name` when the character right before it (in the input, not
/// the output) is non-whitespace, so a standalone `.name` survives.
fn strip_name_property(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in name_property_regex().find_iter(s) {
        let attached = s[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());
        out.push_str(&s[last..m.start()]);
        if !attached {
            out.push_str(m.as_str());
        }
        last = m.end();
    }
    out.push_str(&s[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        strip_property_access(Some(s)).unwrap()
    }

    #[test]
    fn test_trailing_name_property_removed() {
        assert_eq!(strip(r"Calculator\.name"), "Calculator");
        assert_eq!(strip(r"Suite Calculator\.name adds"), "Suite Calculator adds");
    }

    #[test]
    fn test_leading_name_property_kept() {
        assert_eq!(strip(r"\.name"), r"\.name");
    }

    #[test]
    fn test_name_property_after_space_kept() {
        assert_eq!(strip(r"reads \.name field"), r"reads \.name field");
    }

    #[test]
    fn test_repeated_name_properties() {
        assert_eq!(strip(r"a\.name\.name"), "a");
    }

    #[test]
    fn test_only_escaped_dot_counts_as_accessor() {
        assert_eq!(strip(r"calls fn\(name\)"), r"calls fn\(name\)");
        assert_eq!(strip(r"a\(prototype\)b"), r"a\(prototype\)b");
    }

    #[test]
    fn test_plain_word_name_kept() {
        assert_eq!(strip("returns the name"), "returns the name");
    }

    #[test]
    fn test_prototype_path_removed() {
        assert_eq!(strip(r"Calculator\.prototype\.add"), "add");
        assert_eq!(strip(r"Suite \.prototype\.sum"), "Suite sum");
    }

    #[test]
    fn test_absent_name() {
        assert_eq!(strip_property_access(None), None);
    }
}
