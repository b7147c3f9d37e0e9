use crate::ast::{CustomFormat, Section, Token};
use crate::digits::Digits;
use crate::number::Number;
use crate::standard::exponent_text;

/// Role a token plays once its position in the section is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// k-th integer placeholder, counted from the left
    Integer(usize),
    /// k-th fraction placeholder
    Fraction(usize),
    Point,
    Exponent,
    /// Emits its own text (`%`, `‰`, literals)
    Text,
    /// Consumed by the layout: group commas, extra points, late placeholders
    Silent,
}

#[derive(Debug, Clone, Copy)]
struct ExponentStyle {
    upper: bool,
    always_sign: bool,
    min_digits: usize,
}

/// What a section asks for, derived from its tokens
#[derive(Debug, Default)]
struct Layout {
    slots: Vec<Slot>,
    integer_placeholders: usize,
    /// Digits from the first `0` up to the point are mandatory
    min_integer: usize,
    fraction_placeholders: usize,
    /// Digits up to the last `0` after the point are mandatory
    min_fraction: usize,
    grouped: bool,
    /// Power of ten applied before rounding (`%`, `‰`, scaling commas)
    shift: i32,
    exponent: Option<ExponentStyle>,
}

impl Layout {
    fn of(section: &Section) -> Self {
        let mut layout = Layout::default();
        let mut in_fraction = false;
        let mut first_zero = None;
        let mut pending_commas = 0;

        for token in &section.tokens {
            let slot = match token {
                Token::Zero | Token::Digit if layout.exponent.is_some() => Slot::Silent,
                Token::Zero | Token::Digit if in_fraction => {
                    layout.fraction_placeholders += 1;
                    if *token == Token::Zero {
                        layout.min_fraction = layout.fraction_placeholders;
                    }
                    Slot::Fraction(layout.fraction_placeholders - 1)
                }
                Token::Zero | Token::Digit => {
                    // A comma between two integer placeholders turns on grouping
                    if pending_commas > 0 {
                        layout.grouped = true;
                        pending_commas = 0;
                    }
                    if *token == Token::Zero && first_zero.is_none() {
                        first_zero = Some(layout.integer_placeholders);
                    }
                    layout.integer_placeholders += 1;
                    Slot::Integer(layout.integer_placeholders - 1)
                }
                Token::Group => {
                    if !in_fraction && layout.exponent.is_none() && layout.integer_placeholders > 0 {
                        pending_commas += 1;
                    }
                    Slot::Silent
                }
                Token::Point if !in_fraction && layout.exponent.is_none() => {
                    in_fraction = true;
                    layout.shift -= 3 * pending_commas;
                    pending_commas = 0;
                    Slot::Point
                }
                Token::Point => Slot::Silent,
                Token::Exponent {
                    upper,
                    always_sign,
                    min_digits,
                } if layout.exponent.is_none() => {
                    layout.exponent = Some(ExponentStyle {
                        upper: *upper,
                        always_sign: *always_sign,
                        min_digits: *min_digits,
                    });
                    Slot::Exponent
                }
                Token::Exponent { .. } => Slot::Silent,
                Token::Percent => {
                    layout.shift += 2;
                    Slot::Text
                }
                Token::PerMille => {
                    layout.shift += 3;
                    Slot::Text
                }
                Token::Literal(_) => Slot::Text,
            };
            layout.slots.push(slot);
        }

        // Commas trailing the integer placeholders scale by a thousand each
        layout.shift -= 3 * pending_commas;
        layout.min_integer = first_zero.map_or(0, |first| layout.integer_placeholders - first);
        layout
    }
}

struct Rendered {
    text: String,
    nonzero: bool,
}

/// Render a number through a custom pattern, picking the section by sign
pub(crate) fn render(format: &CustomFormat, number: Number) -> String {
    let Some(positive) = format.sections.first() else {
        return String::new();
    };
    let negative_section = format.sections.get(1).filter(|s| !s.is_empty());
    let zero_section = format.sections.get(2).filter(|s| !s.is_empty());

    let negative = number.is_negative();
    let (section, minus) = match negative_section {
        Some(section) if negative => (section, false),
        _ => (positive, negative),
    };

    let rendered = render_section(section, &number.exact_digits());
    if rendered.nonzero {
        return if minus {
            format!("-{}", rendered.text)
        } else {
            rendered.text
        };
    }

    // Zero, or rounded to zero
    render_section(zero_section.unwrap_or(positive), &Digits::zero()).text
}

fn render_section(section: &Section, magnitude: &Digits) -> Rendered {
    let layout = Layout::of(section);
    let mut digits = magnitude.clone();
    digits.shift(layout.shift);

    let mut exponent = 0;
    if layout.exponent.is_some() && !digits.is_zero() {
        // Mantissa keeps as many integer digits as there are placeholders;
        // `.00E0` puts every digit after the point
        let width = if layout.integer_placeholders == 0 && layout.fraction_placeholders > 0 {
            0
        } else {
            layout.integer_placeholders.max(1) as i32
        };
        exponent = digits.scale() - width;
        digits.shift(-exponent);
        digits.round_fraction(layout.fraction_placeholders as i32);
        if digits.scale() > width {
            digits.shift(-1);
            exponent += 1;
        }
    } else {
        digits.round_fraction(layout.fraction_placeholders as i32);
    }

    let mut integer = digits.integer_part();
    if integer.len() < layout.min_integer {
        integer = format!("{}{}", "0".repeat(layout.min_integer - integer.len()), integer);
    }

    let mut fraction = digits.fraction_part(layout.fraction_placeholders);
    while fraction.len() > layout.min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let integer: Vec<char> = integer.chars().collect();
    let fraction: Vec<char> = fraction.chars().collect();
    let placeholders = layout.integer_placeholders;

    let mut text = String::new();
    for (token, slot) in section.tokens.iter().zip(&layout.slots) {
        match *slot {
            Slot::Integer(k) => {
                // Placeholders fill from the right; the first one takes any
                // digits left over on the left
                let end = integer.len() as i64 - (placeholders - 1 - k) as i64;
                let start = if k == 0 { 0 } else { end - 1 };
                for p in start.max(0)..end.max(0) {
                    let p = p as usize;
                    if layout.grouped && p > 0 && (integer.len() - p) % 3 == 0 {
                        text.push(',');
                    }
                    text.push(integer[p]);
                }
            }
            Slot::Point => {
                if placeholders == 0 {
                    text.extend(&integer);
                }
                if !fraction.is_empty() {
                    text.push('.');
                }
            }
            Slot::Fraction(k) => {
                if let Some(&c) = fraction.get(k) {
                    text.push(c);
                }
            }
            Slot::Exponent => {
                if let Some(style) = layout.exponent {
                    let letter = if style.upper { 'E' } else { 'e' };
                    text.push_str(&exponent_text(
                        exponent,
                        letter,
                        style.always_sign,
                        style.min_digits,
                    ));
                }
            }
            Slot::Text => match token {
                Token::Percent => text.push('%'),
                Token::PerMille => text.push('‰'),
                Token::Literal(literal) => text.push_str(literal),
                _ => {}
            },
            Slot::Silent => {}
        }
    }

    Rendered {
        text,
        nonzero: !digits.is_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NumberFormat;
    use crate::parser::parse;

    fn fmt(pattern: &str, number: impl Into<Number>) -> String {
        match parse(pattern) {
            Ok(NumberFormat::Custom(format)) => render(&format, number.into()),
            other => panic!("Expected custom format for {:?}, got {:?}", pattern, other),
        }
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(fmt("00", 7i64), "07");
        assert_eq!(fmt("00", 123i64), "123");
        assert_eq!(fmt("0000", -42i64), "-0042");
    }

    #[test]
    fn test_digit_placeholders() {
        assert_eq!(fmt("#", 0i64), "");
        assert_eq!(fmt("#.##", 0.5), ".5");
        assert_eq!(fmt("#.##", 5i64), "5");
        assert_eq!(fmt("#0.0#", 3.14159), "3.14");
        assert_eq!(fmt("0.00", 2.0), "2.00");
        assert_eq!(fmt("0.##", 2.0), "2");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt("#,##0", 1234567i64), "1,234,567");
        assert_eq!(fmt("#,##0", 5i64), "5");
        assert_eq!(fmt("#,##0.00", 1234.5), "1,234.50");
        assert_eq!(fmt("#,#", 1000i64), "1,000");
    }

    #[test]
    fn test_scaling_commas() {
        assert_eq!(fmt("#,##0,", 1234567i64), "1,235");
        assert_eq!(fmt("0,,.0", 2500000i64), "2.5");
    }

    #[test]
    fn test_percent_and_permille() {
        assert_eq!(fmt("0.0%", 0.256), "25.6%");
        assert_eq!(fmt("0‰", 0.0125), "13‰");
    }

    #[test]
    fn test_literals_between_placeholders() {
        assert_eq!(fmt("(###) ###-####", 5551234567i64), "(555) 123-4567");
        assert_eq!(fmt("'#'0", 9i64), "#9");
        assert_eq!(fmt("0 \\x", 4i64), "4 x");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(fmt("0.0E+0", 1234i64), "1.2E+3");
        assert_eq!(fmt("0.00e00", 0.000345), "3.45e-04");
        assert_eq!(fmt("00.0E0", 1234i64), "12.3E2");
        assert_eq!(fmt("0.0E0", 9.99), "1.0E1");
        assert_eq!(fmt("0.0E0", 0i64), "0.0E0");
    }

    #[test]
    fn test_exponent_without_integer_placeholders() {
        assert_eq!(fmt(".00E0", -1234i64), "-.12E4");
        assert_eq!(fmt(".00E+00", 0.00025), ".25E-03");
        // Rounding carry moves into the exponent
        assert_eq!(fmt(".00E0", 996i64), ".10E4");
    }

    #[test]
    fn test_sections() {
        let pattern = "0.00;(0.00);zero";
        assert_eq!(fmt(pattern, 1.5), "1.50");
        assert_eq!(fmt(pattern, -1.5), "(1.50)");
        assert_eq!(fmt(pattern, 0i64), "zero");
        assert_eq!(fmt(pattern, 0.001), "zero");
        assert_eq!(fmt(pattern, -0.001), "zero");
    }

    #[test]
    fn test_empty_negative_section_falls_back() {
        assert_eq!(fmt("0;;zero", -3i64), "-3");
        assert_eq!(fmt("0;;zero", 0i64), "zero");
    }

    #[test]
    fn test_negative_rounding_to_zero_drops_sign() {
        assert_eq!(fmt("0.0", -0.01), "0.0");
    }

    #[test]
    fn test_leading_point_only() {
        assert_eq!(fmt(".00", 1.5), "1.50");
        assert_eq!(fmt(".00", 0.25), ".25");
    }

    #[test]
    fn test_pure_literal_has_no_digits() {
        assert_eq!(fmt("abc", 42i64), "abc");
    }
}
