use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("Argument '{argument}' out of range: {value} ({reason})")]
    OutOfRange {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse '{value}' as an integer: {reason}")]
    ParseError { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::OutOfRange { .. } | RomanError::ParseError { .. } => ErrorCategory::Input,
            RomanError::ConfigError { .. }
            | RomanError::InvalidConfigValueError { .. }
            | RomanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RomanError::IoError(_)
            | RomanError::CsvError(_)
            | RomanError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::OutOfRange { value, reason, .. } => {
                format!("{} cannot be written as a Roman numeral: {}", value, reason)
            }
            RomanError::ParseError { value, .. } => {
                format!("'{}' is not a whole number", value)
            }
            RomanError::IoError(e) => format!("Could not read or write a file: {}", e),
            RomanError::CsvError(e) => format!("Could not write CSV output: {}", e),
            RomanError::SerializationError(e) => format!("Could not write JSON output: {}", e),
            RomanError::ConfigError { message } => format!("Configuration problem: {}", message),
            RomanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RomanError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Only whole numbers between 0 and 3999 can be converted; use --skip-invalid to ignore bad entries"
            }
            ErrorCategory::Configuration => "Check the command line arguments or the TOML configuration file",
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
