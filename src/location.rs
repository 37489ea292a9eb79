use std::fmt;
use std::path::PathBuf;

use crate::error::LocationError;

/// A `<file>:<line>` position inside a test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    /// 1-based source line.
    pub line: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)
    }
}

/// Splits on the last `:` so that paths containing colons survive.
pub fn parse_location(input: &str) -> Result<Location, LocationError> {
    let (path, line) = input
        .rsplit_once(':')
        .ok_or_else(|| LocationError::missing_separator(input))?;

    if path.is_empty() {
        return Err(LocationError::empty_path(input));
    }

    let line = line
        .trim()
        .parse::<usize>()
        .map_err(|_| LocationError::invalid_line(input, line))?;

    Ok(Location {
        path: PathBuf::from(path),
        line,
    })
}
