pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, InvalidInputPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "roman-numerals"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Convert whole numbers between 0 and 3999 to Roman numerals")
)]
pub struct CliConfig {
    /// Numbers to convert
    #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
    pub numbers: Vec<String>,

    /// File with more numbers, separated by commas, tabs, spaces or newlines
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub input: Option<String>,

    /// Directory for the files written by --formats
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub output_path: Option<String>,

    /// Output files to write: csv, tsv, json
    #[cfg_attr(feature = "cli", arg(short, long, value_delimiter = ','))]
    pub formats: Vec<String>,

    /// Record invalid numbers instead of stopping at the first one
    #[cfg_attr(feature = "cli", arg(long))]
    pub skip_invalid: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn numbers(&self) -> Vec<String> {
        self.numbers.clone()
    }

    fn input_file(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_formats(&self) -> Result<Vec<OutputFormat>> {
        self.formats.iter().map(|f| f.parse()).collect()
    }

    fn invalid_input_policy(&self) -> InvalidInputPolicy {
        if self.skip_invalid {
            InvalidInputPolicy::Skip
        } else {
            InvalidInputPolicy::Fail
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }

        for format in &self.formats {
            validation::validate_one_of("formats", format, &OutputFormat::NAMES)?;
        }

        if !self.formats.is_empty() {
            let output_path = validation::validate_required_field("output_path", &self.output_path)?;
            validation::validate_path("output_path", output_path)?;
        }

        Ok(())
    }
}
