use crate::ast::{StandardFormat, StandardKind};
use crate::digits::Digits;
use crate::error::FormatError;
use crate::number::Number;

const CURRENCY_SYMBOL: char = '¤';

/// Digit count past which shortest `G`/`R` output of a double turns scientific
const DOUBLE_GENERAL_DIGITS: i32 = 15;
/// Same for 64-bit integers; every i64 stays in fixed notation
const INTEGER_GENERAL_DIGITS: i32 = 19;

/// Render a number through a standard specifier
pub(crate) fn render(spec: &StandardFormat, number: Number) -> Result<String, FormatError> {
    let negative = number.is_negative();

    let text = match spec.kind {
        StandardKind::Decimal => {
            let Number::Integer(value) = number else {
                return Err(FormatError::IntegerOnly(spec.kind.letter()));
            };
            let digits = value.unsigned_abs().to_string();
            let width = spec.precision.unwrap_or(0) as usize;
            return Ok(signed(negative, pad_left(digits, width)));
        }

        StandardKind::Hexadecimal => {
            let Number::Integer(value) = number else {
                return Err(FormatError::IntegerOnly(spec.kind.letter()));
            };
            // Negative values print their two's complement bits
            let digits = if spec.upper {
                format!("{:X}", value)
            } else {
                format!("{:x}", value)
            };
            return Ok(pad_left(digits, spec.precision.unwrap_or(0) as usize));
        }

        StandardKind::FixedPoint => {
            let places = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.round_fraction(places as i32);
            SignedText::new(&digits, fixed(&digits, places as usize, false))
        }

        StandardKind::Number => {
            let places = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.round_fraction(places as i32);
            SignedText::new(&digits, fixed(&digits, places as usize, true))
        }

        StandardKind::Currency => {
            let places = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.round_fraction(places as i32);
            let body = format!("{}{}", CURRENCY_SYMBOL, fixed(&digits, places as usize, true));
            // Invariant culture writes negative amounts in parentheses
            if negative && !digits.is_zero() {
                return Ok(format!("({})", body));
            }
            SignedText::new(&digits, body)
        }

        StandardKind::Percent => {
            let places = spec.precision.unwrap_or(2);
            let mut digits = number.exact_digits();
            digits.shift(2);
            digits.round_fraction(places as i32);
            let body = fixed(&digits, places as usize, true);
            SignedText::new(&digits, format!("{} %", body))
        }

        StandardKind::Exponential => {
            let places = spec.precision.unwrap_or(6) as usize;
            let mut digits = number.exact_digits();
            digits.round_significant(places as i32 + 1);
            let body = scientific(&digits, places, exponent_letter(spec.upper), true, 3);
            SignedText::new(&digits, body)
        }

        StandardKind::General => match spec.precision.filter(|&p| p > 0) {
            Some(precision) => {
                let mut digits = number.exact_digits();
                digits.round_significant(precision as i32);
                let body = general(&digits, precision as i32, exponent_letter(spec.upper));
                SignedText::new(&digits, body)
            }
            None => shortest(number, exponent_letter(spec.upper)),
        },

        StandardKind::RoundTrip => shortest(number, 'E'),
    };

    Ok(text.finish(negative))
}

/// Default rendering used when no specifier is given
pub(crate) fn render_default(number: Number) -> String {
    match number {
        Number::Integer(value) => value.to_string(),
        Number::Float(_) => shortest(number, 'E').finish(number.is_negative()),
    }
}

/// Formatted magnitude plus whether any non-zero digit survived rounding
struct SignedText {
    body: String,
    nonzero: bool,
}

impl SignedText {
    fn new(digits: &Digits, body: String) -> Self {
        SignedText {
            body,
            nonzero: !digits.is_zero(),
        }
    }

    /// Values that round to zero never carry a minus sign
    fn finish(self, negative: bool) -> String {
        signed(negative && self.nonzero, self.body)
    }
}

fn shortest(number: Number, letter: char) -> SignedText {
    if let Number::Float(value) = number {
        if !value.is_finite() {
            let body = if value.is_nan() { "NaN" } else { "Infinity" };
            return SignedText {
                body: body.to_string(),
                nonzero: !value.is_nan(),
            };
        }
    }

    let digits = number.shortest_digits();
    let precision = match number {
        Number::Integer(_) => INTEGER_GENERAL_DIGITS,
        Number::Float(_) => DOUBLE_GENERAL_DIGITS,
    };
    let body = general(&digits, precision, letter);
    SignedText::new(&digits, body)
}

/// Fixed notation while the decimal exponent lies in [-4, precision),
/// otherwise `d.dddE+XX`
fn general(digits: &Digits, precision: i32, letter: char) -> String {
    let scale = digits.scale();
    if digits.is_zero() || (scale > -4 && scale <= precision) {
        fixed(digits, digits.fraction_len(), false)
    } else {
        scientific(digits, digits.len().saturating_sub(1), letter, true, 2)
    }
}

/// `1234.50`, or `1,234.50` when grouped
fn fixed(digits: &Digits, places: usize, grouped: bool) -> String {
    let mut integer = digits.integer_part();
    if integer.is_empty() {
        integer.push('0');
    }
    if grouped {
        integer = group_thousands(&integer);
    }

    if places == 0 {
        integer
    } else {
        format!("{}.{}", integer, digits.fraction_part(places))
    }
}

/// One leading digit, `places` fraction digits, then the exponent
fn scientific(
    digits: &Digits,
    places: usize,
    letter: char,
    always_sign: bool,
    min_exponent_digits: usize,
) -> String {
    let significant = digits.significant();
    let exponent = if digits.is_zero() { 0 } else { digits.scale() - 1 };

    let mut body = significant[..1].to_string();
    if places > 0 {
        body.push('.');
        body.push_str(&pad_right(significant[1..].to_string(), places));
    }
    body.push_str(&exponent_text(exponent, letter, always_sign, min_exponent_digits));
    body
}

pub(crate) fn exponent_text(
    exponent: i32,
    letter: char,
    always_sign: bool,
    min_digits: usize,
) -> String {
    let sign = if exponent < 0 {
        "-"
    } else if always_sign {
        "+"
    } else {
        ""
    };
    let digits = pad_left(exponent.unsigned_abs().to_string(), min_digits);
    format!("{}{}{}", letter, sign, digits)
}

fn exponent_letter(upper: bool) -> char {
    if upper {
        'E'
    } else {
        'e'
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn pad_left(text: String, width: usize) -> String {
    if text.len() >= width {
        text
    } else {
        format!("{}{}", "0".repeat(width - text.len()), text)
    }
}

fn pad_right(mut text: String, width: usize) -> String {
    if text.len() < width {
        text.push_str(&"0".repeat(width - text.len()));
    }
    text.truncate(width);
    text
}

fn signed(negative: bool, body: String) -> String {
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}
