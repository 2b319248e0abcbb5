//! Roman numeral codec
//!
//! Converts between numeral strings and integers. Decoding is lenient and
//! accepts any sequence of the seven symbols; encoding always produces the
//! canonical subtractive form.

use crate::error::{CalcError, BIGGER_CALCULATOR_MESSAGE};
use crate::CalcResult;

/// Smallest value a numeral can express
pub const MIN_VALUE: i64 = 1;

/// Largest value a numeral can express
pub const MAX_VALUE: i64 = 3999;

const ENCODING_TABLE: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Value of a single numeral symbol
pub fn symbol_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Decode a numeral into its integer value.
///
/// Walks the symbols from right to left, adding each value unless it is
/// smaller than the symbol to its right, in which case it is subtracted.
/// Non-canonical input is accepted:
///
/// ```text
/// XIV  = 14
/// IIII = 4
/// VX   = 5
/// ```
///
/// The result is not range checked: `MMMM` decodes to 4000.
pub fn decode(numeral: &str) -> CalcResult<i64> {
    if numeral.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let mut total: i64 = 0;
    let mut prev_value: i64 = 0;

    for (offset, symbol) in numeral.char_indices().rev() {
        let value = symbol_value(symbol).ok_or(CalcError::InvalidSymbol { symbol, offset })?;
        total = if value >= prev_value {
            total.checked_add(value)
        } else {
            total.checked_sub(value)
        }
        .ok_or(CalcError::Overflow {
            span: None,
            negative: false,
        })?;
        prev_value = value;
    }

    Ok(total)
}

/// Encode a value as a canonical numeral, failing outside 1..=3999.
pub fn try_encode(value: i64) -> CalcResult<String> {
    if value > MAX_VALUE {
        return Err(CalcError::RangeExceeded { value });
    }
    if value < MIN_VALUE {
        return Err(CalcError::NotRepresentable { value });
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for (symbols, step) in ENCODING_TABLE {
        while remaining >= step {
            numeral.push_str(symbols);
            remaining -= step;
        }
    }

    Ok(numeral)
}

/// Encode a value as a numeral for display.
///
/// Values above [`MAX_VALUE`] do not fail; they produce the sentence
/// "You're going to need a bigger calculator." so the result can sit in the
/// same slot as a numeral. Values below [`MIN_VALUE`] fail with
/// [`CalcError::NotRepresentable`].
pub fn encode(value: i64) -> CalcResult<String> {
    match try_encode(value) {
        Err(CalcError::RangeExceeded { .. }) => Ok(BIGGER_CALCULATOR_MESSAGE.to_string()),
        other => other,
    }
}

/// Whether the input, ignoring surrounding whitespace, is one bare numeral
pub fn is_numeral(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| symbol_value(c).is_some())
}
