// ============================================================================
// Operand Parser
// Converts raw text into an exact decimal value
// ============================================================================

use super::errors::{CalcError, CalcResult};
use rust_decimal::Decimal;

/// Largest scale `rust_decimal` can represent.
const MAX_SCALE: i64 = 28;

/// Parse an operand into a `Decimal` without losing any supplied digits.
///
/// Accepted forms (surrounding whitespace is ignored):
/// - "42", "-7", "+3"
/// - "3.14", ".5", "5."
/// - "1e3", "2.5E-4", "-6.02e+2"
///
/// A missing value, blank text, anything that is not a decimal literal, and
/// literals the decimal type cannot hold exactly all yield
/// `CalcError::InvalidNumber`.
pub fn parse_operand(raw: Option<&str>) -> CalcResult<Decimal> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(CalcError::InvalidNumber);
    }

    parse_literal(text).ok_or(CalcError::InvalidNumber)
}

fn parse_literal(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = split_sign(text);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !is_digits(int_digits) || !is_digits(frac_digits) {
        return None;
    }

    let exponent = match exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    // Trailing fractional zeros carry no value; dropping them keeps long
    // literals like "1.000...0" representable.
    let frac_digits = frac_digits.trim_end_matches('0');

    let mut coefficient: i128 = 0;
    for digit in int_digits.bytes().chain(frac_digits.bytes()) {
        coefficient = coefficient
            .checked_mul(10)?
            .checked_add(i128::from(digit - b'0'))?;
    }

    if coefficient == 0 {
        return Some(Decimal::ZERO);
    }

    let mut scale = i64::try_from(frac_digits.len())
        .ok()?
        .checked_sub(exponent)?;

    if scale < 0 {
        let shift = u32::try_from(-scale).ok()?;
        coefficient = coefficient.checked_mul(10i128.checked_pow(shift)?)?;
        scale = 0;
    }

    while scale > MAX_SCALE && coefficient % 10 == 0 {
        coefficient /= 10;
        scale -= 1;
    }
    if scale > MAX_SCALE {
        return None;
    }

    if negative {
        coefficient = -coefficient;
    }

    Decimal::try_from_i128_with_scale(coefficient, u32::try_from(scale).ok()?).ok()
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
