//! Integer to Roman numeral conversion.
//!
//! Numbers are split into thousands, hundreds, tens and units. Each digit is
//! rendered with the symbol triple of its place value and the fragments are
//! joined most significant first, so `1994` becomes `M` + `CM` + `XC` + `IV`.
//!
//! ```
//! use roman_numerals::{to_roman_numeral, ToRomanNumeral};
//!
//! assert_eq!(to_roman_numeral(1994).unwrap(), "MCMXCIV");
//! assert_eq!(3999u16.to_roman_numeral().unwrap(), "MMMCMXCIX");
//! assert!(to_roman_numeral(4000).is_err());
//! ```

use crate::domain::place_value::PLACE_VALUES_MOST_SIGNIFICANT_FIRST;
use crate::utils::error::{RomanError, Result};

/// Smallest convertible number. It converts to the empty string.
pub const MIN_VALUE: u32 = 0;

/// Largest convertible number.
pub const MAX_VALUE: u32 = 3999;

const ARGUMENT: &str = "number";

/// Converts a signed integer in `[0, 3999]`.
pub fn to_roman_numeral(number: i32) -> Result<String> {
    number.to_roman_numeral()
}

/// Converts an unsigned integer in `[0, 3999]`.
pub fn to_roman_numeral_unsigned(number: u32) -> Result<String> {
    number.to_roman_numeral()
}

/// Conversion entry point for the primitive integer types.
pub trait ToRomanNumeral {
    fn to_roman_numeral(&self) -> Result<String>;
}

fn below_minimum<T: std::fmt::Display>(number: T) -> RomanError {
    RomanError::OutOfRange {
        argument: ARGUMENT.to_string(),
        value: number.to_string(),
        reason: format!("must not be less than {}", MIN_VALUE),
    }
}

fn above_maximum<T: std::fmt::Display>(number: T, signed: bool) -> RomanError {
    let reason = if signed {
        format!("must not be greater than {}", MAX_VALUE)
    } else {
        format!("must be less than or equal to {}", MAX_VALUE)
    };
    RomanError::OutOfRange {
        argument: ARGUMENT.to_string(),
        value: number.to_string(),
        reason,
    }
}

macro_rules! impl_to_roman_numeral_signed {
    ($($t:ty),*) => {
        $(
            impl ToRomanNumeral for $t {
                fn to_roman_numeral(&self) -> Result<String> {
                    let number = *self as i64;
                    if number < MIN_VALUE as i64 {
                        return Err(below_minimum(number));
                    }
                    if number > MAX_VALUE as i64 {
                        return Err(above_maximum(number, true));
                    }
                    Ok(convert_unchecked(number as u32))
                }
            }
        )*
    };
}

macro_rules! impl_to_roman_numeral_unsigned {
    ($($t:ty),*) => {
        $(
            impl ToRomanNumeral for $t {
                fn to_roman_numeral(&self) -> Result<String> {
                    let number = *self as u64;
                    if number > MAX_VALUE as u64 {
                        return Err(above_maximum(number, false));
                    }
                    Ok(convert_unchecked(number as u32))
                }
            }
        )*
    };
}

impl_to_roman_numeral_signed!(i8, i16, i32, i64, isize);
impl_to_roman_numeral_unsigned!(u8, u16, u32, u64, usize);

// Caller guarantees `number <= MAX_VALUE`.
fn convert_unchecked(number: u32) -> String {
    debug_assert!(number <= MAX_VALUE);

    PLACE_VALUES_MOST_SIGNIFICANT_FIRST
        .iter()
        .map(|place| place.symbols().fragment(place.digit_of(number)))
        .collect()
}
