pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{
    engine::{ConversionEngine, RunSummary},
    pipeline::ConversionPipeline,
};
pub use domain::converter::{
    to_roman_numeral, to_roman_numeral_unsigned, ToRomanNumeral, MAX_VALUE, MIN_VALUE,
};
pub use utils::error::{RomanError, Result};
