use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("unsupported file type: {path} (use --language to override)")]
    UnsupportedFileType { path: PathBuf },

    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse source code in {path}")]
    ParseFailed { path: PathBuf },

    #[error("syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParserError {
    pub fn unsupported_file_type(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFileType { path: path.into() }
    }

    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn syntax_error(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            line,
            column,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_file_type_display() {
        let err = ParserError::unsupported_file_type("notes.txt");
        assert_eq!(
            err.to_string(),
            "unsupported file type: notes.txt (use --language to override)"
        );
    }

    #[test]
    fn test_syntax_error_display() {
        let err = ParserError::syntax_error(10, 5, "unexpected `)`");
        assert_eq!(
            err.to_string(),
            "syntax error at line 10, column 5: unexpected `)`"
        );
    }
}
