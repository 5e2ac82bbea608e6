use roman_numerals::{to_roman_numeral, to_roman_numeral_unsigned, RomanError, ToRomanNumeral};
use std::thread;

/// Independent reference using the greedy value table.
fn reference_numeral(mut number: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut numeral = String::new();
    for (value, symbol) in TABLE {
        while number >= value {
            numeral.push_str(symbol);
            number -= value;
        }
    }
    numeral
}

#[test]
fn test_whole_range_uses_roman_alphabet_only() {
    for n in 0..=3999 {
        let numeral = to_roman_numeral(n).unwrap();
        assert!(
            numeral.chars().all(|c| "IVXLCDM".contains(c)),
            "{} -> {}",
            n,
            numeral
        );
        assert_eq!(numeral.is_empty(), n == 0);
    }
}

#[test]
fn test_whole_range_matches_reference() {
    for n in 0..=3999u32 {
        assert_eq!(to_roman_numeral_unsigned(n).unwrap(), reference_numeral(n), "{}", n);
    }
}

#[test]
fn test_known_values() {
    let cases = [
        (0, ""),
        (1, "I"),
        (3, "III"),
        (4, "IV"),
        (9, "IX"),
        (14, "XIV"),
        (40, "XL"),
        (90, "XC"),
        (400, "CD"),
        (900, "CM"),
        (1994, "MCMXCIV"),
        (3999, "MMMCMXCIX"),
    ];

    for (number, expected) in cases {
        assert_eq!(to_roman_numeral(number).unwrap(), expected, "{}", number);
    }
}

#[test]
fn test_length_is_not_monotonic() {
    let three = to_roman_numeral(3).unwrap();
    let four = to_roman_numeral(4).unwrap();
    assert!(three.len() > four.len());
}

#[test]
fn test_out_of_range_inputs() {
    for number in [-1, 4000, i32::MIN, i32::MAX] {
        assert!(
            matches!(to_roman_numeral(number), Err(RomanError::OutOfRange { .. })),
            "{}",
            number
        );
    }
    assert!(matches!(
        to_roman_numeral_unsigned(4000),
        Err(RomanError::OutOfRange { .. })
    ));
}

#[test]
fn test_all_integer_types_agree() {
    for n in [0u16, 1, 49, 255, 999, 2024, 3999] {
        let expected = to_roman_numeral(n as i32).unwrap();
        assert_eq!(n.to_roman_numeral().unwrap(), expected);
        assert_eq!((n as i16).to_roman_numeral().unwrap(), expected);
        assert_eq!((n as i64).to_roman_numeral().unwrap(), expected);
        assert_eq!((n as u64).to_roman_numeral().unwrap(), expected);
        assert_eq!((n as isize).to_roman_numeral().unwrap(), expected);
        assert_eq!((n as usize).to_roman_numeral().unwrap(), expected);
    }

    assert!((-1i16).to_roman_numeral().is_err());
    assert!(4000usize.to_roman_numeral().is_err());
}

#[test]
fn test_repeated_calls_are_identical() {
    for n in [0, 8, 444, 1666, 3999] {
        assert_eq!(to_roman_numeral(n).unwrap(), to_roman_numeral(n).unwrap());
    }
}

#[test]
fn test_concurrent_callers_agree_with_sequential() {
    let sequential: Vec<String> = (0..=3999).map(|n| to_roman_numeral(n).unwrap()).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (0..=3999).map(|n| to_roman_numeral(n).unwrap()).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), sequential);
    }
}
