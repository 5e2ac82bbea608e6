/// Positional weight of a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PlaceValue {
    Units = 1,
    Tens = 10,
    Hundreds = 100,
    Thousands = 1000,
}

/// Place values in the order their fragments appear in a numeral.
pub const PLACE_VALUES_MOST_SIGNIFICANT_FIRST: [PlaceValue; 4] = [
    PlaceValue::Thousands,
    PlaceValue::Hundreds,
    PlaceValue::Tens,
    PlaceValue::Units,
];

const SYMBOLS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

impl PlaceValue {
    pub const fn weight(self) -> u32 {
        self as u32
    }

    /// The decimal digit of `number` at this place value.
    pub const fn digit_of(self, number: u32) -> u32 {
        number / self.weight() % 10
    }

    pub const fn symbols(self) -> SymbolTriple {
        let offset = match self {
            PlaceValue::Units => 0,
            PlaceValue::Tens => 2,
            PlaceValue::Hundreds => 4,
            PlaceValue::Thousands => 6,
        };
        SymbolTriple::at_offset(offset)
    }
}

/// The base, five and ten symbols of one place value.
///
/// For `Thousands` only `base` is ever rendered: digits above 3 are outside
/// the supported range, so `five` and `ten` repeat `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTriple {
    pub base: char,
    pub five: char,
    pub ten: char,
}

impl SymbolTriple {
    const fn at_offset(offset: usize) -> Self {
        let last = SYMBOLS.len() - 1;
        let five = if offset + 1 > last { last } else { offset + 1 };
        let ten = if offset + 2 > last { last } else { offset + 2 };
        Self {
            base: SYMBOLS[offset],
            five: SYMBOLS[five],
            ten: SYMBOLS[ten],
        }
    }

    /// Renders a single digit (0..=9) with subtractive notation.
    pub fn fragment(&self, digit: u32) -> String {
        match digit {
            0 => String::new(),
            1..=3 => self.base.to_string().repeat(digit as usize),
            4 => [self.base, self.five].iter().collect(),
            5..=8 => {
                let mut fragment = String::with_capacity(digit as usize - 4);
                fragment.push(self.five);
                fragment.extend(std::iter::repeat(self.base).take(digit as usize - 5));
                fragment
            }
            _ => [self.base, self.ten].iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_of() {
        assert_eq!(PlaceValue::Thousands.digit_of(1994), 1);
        assert_eq!(PlaceValue::Hundreds.digit_of(1994), 9);
        assert_eq!(PlaceValue::Tens.digit_of(1994), 9);
        assert_eq!(PlaceValue::Units.digit_of(1994), 4);
        assert_eq!(PlaceValue::Thousands.digit_of(7), 0);
    }

    #[test]
    fn test_symbol_triples() {
        let units = PlaceValue::Units.symbols();
        assert_eq!((units.base, units.five, units.ten), ('I', 'V', 'X'));

        let tens = PlaceValue::Tens.symbols();
        assert_eq!((tens.base, tens.five, tens.ten), ('X', 'L', 'C'));

        let hundreds = PlaceValue::Hundreds.symbols();
        assert_eq!((hundreds.base, hundreds.five, hundreds.ten), ('C', 'D', 'M'));

        assert_eq!(PlaceValue::Thousands.symbols().base, 'M');
    }

    #[test]
    fn test_fragment_table() {
        let units = PlaceValue::Units.symbols();
        let expected = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

        for (digit, fragment) in expected.iter().enumerate() {
            assert_eq!(units.fragment(digit as u32), *fragment, "digit {}", digit);
        }
    }

    #[test]
    fn test_ten_symbol_is_next_base() {
        assert_eq!(PlaceValue::Units.symbols().ten, PlaceValue::Tens.symbols().base);
        assert_eq!(PlaceValue::Tens.symbols().ten, PlaceValue::Hundreds.symbols().base);
        assert_eq!(PlaceValue::Hundreds.symbols().ten, PlaceValue::Thousands.symbols().base);
    }
}
