use crate::core::{ConfigProvider, InvalidInputPolicy, OutputFormat};
use crate::utils::error::{RomanError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub numbers: Vec<i64>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default)]
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_invalid: Option<InvalidInputPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// `compact` (default) or `json`.
    pub format: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RomanError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RomanError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }

    pub fn set_invalid_input_policy(&mut self, policy: InvalidInputPolicy) {
        self.error_handling = Some(ErrorHandlingConfig {
            on_invalid: Some(policy),
        });
    }
}

impl ConfigProvider for TomlConfig {
    fn numbers(&self) -> Vec<String> {
        self.input.numbers.iter().map(|n| n.to_string()).collect()
    }

    fn input_file(&self) -> Option<&str> {
        self.input.file.as_deref()
    }

    fn output_formats(&self) -> Result<Vec<OutputFormat>> {
        self.output.formats.iter().map(|f| f.parse()).collect()
    }

    fn invalid_input_policy(&self) -> InvalidInputPolicy {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_invalid)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;
        validation::validate_path("output.path", &self.output.path)?;

        if let Some(file) = &self.input.file {
            validation::validate_path("input.file", file)?;
        }

        for format in &self.output.formats {
            validation::validate_one_of("output.formats", format, &OutputFormat::NAMES)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[job]
name = "invoice-years"

[input]
numbers = [1, 4, 1994]
file = "numbers.txt"

[output]
path = "./output"
formats = ["csv", "json"]

[error_handling]
on_invalid = "skip"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.job.name, "invoice-years");
        assert_eq!(config.numbers(), vec!["1", "4", "1994"]);
        assert_eq!(config.input_file(), Some("numbers.txt"));
        assert_eq!(
            config.output_formats().unwrap(),
            vec![OutputFormat::Csv, OutputFormat::Json]
        );
        assert_eq!(config.invalid_input_policy(), InvalidInputPolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "minimal"

[output]
path = "./output"
"#,
        )
        .unwrap();

        assert!(config.numbers().is_empty());
        assert_eq!(config.input_file(), None);
        assert!(config.output_formats().unwrap().is_empty());
        assert_eq!(config.invalid_input_policy(), InvalidInputPolicy::Fail);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_TEST_OUTPUT_DIR", "/tmp/roman-out");

        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "env"

[output]
path = "${ROMAN_TEST_OUTPUT_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), "/tmp/roman-out");

        std::env::remove_var("ROMAN_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "env"

[output]
path = "${ROMAN_TEST_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), "${ROMAN_TEST_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "  "

[output]
path = "./output"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "bad-format"

[output]
path = "./output"
formats = ["xml"]
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[job]
name = "bad-level"

[output]
path = "./output"

[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_policy_fails_to_parse() {
        let result = TomlConfig::from_toml_str(
            r#"
[job]
name = "policy"

[output]
path = "./output"

[error_handling]
on_invalid = "ignore"
"#,
        );
        assert!(matches!(result, Err(RomanError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "invoice-years");
    }
}
