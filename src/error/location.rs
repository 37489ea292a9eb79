use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("expected <file>:<line>, got '{input}'")]
    MissingSeparator { input: String },

    #[error("missing file path in '{input}'")]
    EmptyPath { input: String },

    #[error("invalid line number '{line}' in '{input}'")]
    InvalidLine { input: String, line: String },
}

impl LocationError {
    pub fn missing_separator(input: impl Into<String>) -> Self {
        Self::MissingSeparator {
            input: input.into(),
        }
    }

    pub fn empty_path(input: impl Into<String>) -> Self {
        Self::EmptyPath {
            input: input.into(),
        }
    }

    pub fn invalid_line(input: impl Into<String>, line: impl Into<String>) -> Self {
        Self::InvalidLine {
            input: input.into(),
            line: line.into(),
        }
    }
}
