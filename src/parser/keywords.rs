use super::node::NodeKind;

const DESCRIBE_KEYWORDS: &[&str] = &["describe", "fdescribe", "xdescribe"];
const TEST_KEYWORDS: &[&str] = &["it", "fit", "xit", "test", "xtest"];
const EXPECT_KEYWORDS: &[&str] = &["expect"];

/// Member that turns a block function into a table-driven factory.
pub const EACH_MEMBER: &str = "each";

/// Maps the root identifier of a callee (`it` in `it.only(...)`) to a kind.
pub fn kind_for_callee(identifier: &str) -> Option<NodeKind> {
    if DESCRIBE_KEYWORDS.contains(&identifier) {
        Some(NodeKind::Describe)
    } else if TEST_KEYWORDS.contains(&identifier) {
        Some(NodeKind::Test)
    } else if EXPECT_KEYWORDS.contains(&identifier) {
        Some(NodeKind::Expect)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_keywords() {
        for keyword in ["describe", "fdescribe", "xdescribe"] {
            assert_eq!(kind_for_callee(keyword), Some(NodeKind::Describe));
        }
    }

    #[test]
    fn test_test_keywords() {
        for keyword in ["it", "fit", "xit", "test", "xtest"] {
            assert_eq!(kind_for_callee(keyword), Some(NodeKind::Test));
        }
    }

    #[test]
    fn test_expect_keyword() {
        assert_eq!(kind_for_callee("expect"), Some(NodeKind::Expect));
    }

    #[test]
    fn test_unknown_callee() {
        assert_eq!(kind_for_callee("beforeEach"), None);
        assert_eq!(kind_for_callee("Describe"), None);
    }
}
