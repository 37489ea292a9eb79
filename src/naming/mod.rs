//! Test name rewriting.
//!
//! A raw declared name goes through three passes before it can be handed to
//! a test runner's name filter: placeholders become wildcards, the result is
//! regex-escaped with the wildcards left intact, and property-access noise
//! (`Foo.name`, `Foo.prototype.bar`) is stripped.

mod escape;
mod interpolation;
mod properties;

pub use escape::escape_regex;
pub use interpolation::{resolve_interpolation, MATCH_ANY};
pub use properties::strip_property_access;

/// Escapes an already interpolation-resolved name and strips property noise.
/// Absence passes through.
pub fn to_name_pattern(full_test_name: Option<&str>) -> Option<String> {
    let escaped = full_test_name.map(escape_regex);
    strip_property_access(escaped.as_deref())
}
