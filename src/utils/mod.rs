mod string;

pub use string::{decode_escape_sequence, unquote_string};
