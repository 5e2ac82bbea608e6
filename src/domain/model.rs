use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::RomanError;

/// One token waiting to be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    /// `"args"` for inline numbers, otherwise the input file path.
    pub origin: String,
    /// 1-based position among the inline numbers, or line in the file.
    pub line: usize,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub number: i64,
    pub numeral: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub origin: String,
    pub line: usize,
    pub raw: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub conversions: Vec<Conversion>,
    pub rejections: Vec<Rejection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["csv", "tsv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RomanError::InvalidConfigValueError {
                field: "formats".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// What the pipeline does with a token it cannot convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    #[default]
    Fail,
    Skip,
}
