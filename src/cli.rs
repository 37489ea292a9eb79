use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::Path;

use crate::error::IoError;
use crate::location::{parse_location, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Javascript,
    Typescript,
    Tsx,
}

#[derive(Parser, Debug)]
#[command(name = "jestname")]
#[command(about = "Print the full name of the test enclosing a file:line location", long_about = None)]
pub struct Args {
    /// Location inside a test file, as <FILE>:<LINE> (1-based line)
    #[arg(value_name = "FILE:LINE", value_parser = parse_location)]
    pub location: Location,

    /// Language (auto-detected from the file extension if not specified)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Output format (plain, json)
    #[arg(short = 'f', long, default_value = "plain")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.location.path)?;
        Ok(())
    }
}

pub fn detect_language(file_path: &Path) -> Option<Language> {
    file_path.extension()?.to_str().and_then(|ext| match ext {
        "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
        "ts" | "mts" | "cts" => Some(Language::Typescript),
        "tsx" => Some(Language::Tsx),
        _ => None,
    })
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(IoError::file_not_found(path).into());
    }
    if !path.is_file() {
        return Err(IoError::not_a_file(path).into());
    }
    Ok(())
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Tsx => "tsx",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}
