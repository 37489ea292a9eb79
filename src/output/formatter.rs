use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::blocks::BlockRange;
use crate::cli::OutputFormat;
use crate::resolve::Resolution;

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub file: String,
    pub line: usize,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockRange>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(path: &Path, resolution: &Resolution, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Plain => Ok(resolution.test_name().to_string()),
            OutputFormat::Json => {
                let output = Self::build_output(path, resolution);
                Ok(serde_json::to_string_pretty(&output)?)
            }
        }
    }

    pub fn build_output(path: &Path, resolution: &Resolution) -> JsonOutput {
        JsonOutput {
            file: path.display().to_string(),
            line: resolution.line,
            name: resolution.name.clone(),
            block: resolution.block,
        }
    }
}
