use crate::ast::*;
use crate::error::FormatError;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

/// Largest precision a standard specifier accepts
pub const MAX_PRECISION: u32 = 999_999_999;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct FormatParser;

/// Parse a format specifier. The empty string selects the default format.
pub fn parse(input: &str) -> Result<NumberFormat, FormatError> {
    if input.is_empty() {
        return Ok(NumberFormat::Default);
    }

    let pairs = FormatParser::parse(Rule::format, input)?;

    let body = pairs
        .into_iter()
        .next()
        .and_then(|format| format.into_inner().next())
        .ok_or_else(|| FormatError::Syntax {
            spec: input.to_string(),
            message: "empty format".to_string(),
        })?;

    match body.as_rule() {
        Rule::standard => build_standard(body).map(NumberFormat::Standard),
        Rule::custom => Ok(NumberFormat::Custom(build_custom(body))),
        rule => Err(FormatError::Syntax {
            spec: input.to_string(),
            message: format!("unexpected {:?}", rule),
        }),
    }
}

fn build_standard(pair: Pair<Rule>) -> Result<StandardFormat, FormatError> {
    let mut letter = 'G';
    let mut precision = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::specifier => letter = inner.as_str().chars().next().unwrap_or('G'),
            Rule::precision => {
                let text = inner.as_str();
                let value = text
                    .parse::<u32>()
                    .ok()
                    .filter(|&p| p <= MAX_PRECISION)
                    .ok_or_else(|| FormatError::PrecisionOutOfRange(text.to_string()))?;
                precision = Some(value);
            }
            _ => {}
        }
    }

    let kind = StandardKind::from_letter(letter).ok_or(FormatError::UnknownSpecifier(letter))?;

    Ok(StandardFormat {
        kind,
        upper: letter.is_ascii_uppercase(),
        precision,
    })
}

fn build_custom(pair: Pair<Rule>) -> CustomFormat {
    let sections = pair
        .into_inner()
        .filter(|section| section.as_rule() == Rule::section)
        .map(|section| Section {
            tokens: section.into_inner().map(build_token).collect(),
        })
        .collect();

    CustomFormat { sections }
}

fn build_token(pair: Pair<Rule>) -> Token {
    match pair.as_rule() {
        Rule::zero => Token::Zero,
        Rule::digit => Token::Digit,
        Rule::point => Token::Point,
        Rule::group => Token::Group,
        Rule::percent => Token::Percent,
        Rule::permille => Token::PerMille,
        Rule::exponent => {
            let mut upper = true;
            let mut always_sign = false;
            let mut min_digits = 1;
            for part in pair.into_inner() {
                match part.as_rule() {
                    Rule::exponent_marker => upper = part.as_str() == "E",
                    Rule::exponent_sign => always_sign = part.as_str() == "+",
                    Rule::exponent_digits => min_digits = part.as_str().len(),
                    _ => {}
                }
            }
            Token::Exponent {
                upper,
                always_sign,
                min_digits,
            }
        }
        // Quotes and backslash escapes carry their text in the inner pair
        Rule::quoted | Rule::escaped => {
            let text = pair
                .into_inner()
                .next()
                .map(|inner| inner.as_str().to_string())
                .unwrap_or_default();
            Token::Literal(text)
        }
        _ => Token::Literal(pair.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(input: &str) -> CustomFormat {
        match parse(input) {
            Ok(NumberFormat::Custom(format)) => format,
            other => panic!("Expected custom format for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse("").unwrap(), NumberFormat::Default);
    }

    #[test]
    fn test_standard_specifiers() {
        assert_eq!(
            parse("F2").unwrap(),
            NumberFormat::Standard(StandardFormat {
                kind: StandardKind::FixedPoint,
                upper: true,
                precision: Some(2),
            })
        );
        assert_eq!(
            parse("x").unwrap(),
            NumberFormat::Standard(StandardFormat {
                kind: StandardKind::Hexadecimal,
                upper: false,
                precision: None,
            })
        );
    }

    #[test]
    fn test_unknown_standard_letter() {
        assert_eq!(parse("Z2"), Err(FormatError::UnknownSpecifier('Z')));
        assert_eq!(parse("Q"), Err(FormatError::UnknownSpecifier('Q')));
    }

    #[test]
    fn test_precision_out_of_range() {
        assert!(matches!(
            parse("F1000000000"),
            Err(FormatError::PrecisionOutOfRange(_))
        ));
        assert!(matches!(
            parse("D99999999999999999999"),
            Err(FormatError::PrecisionOutOfRange(_))
        ));
    }

    #[test]
    fn test_zero_padding_pattern() {
        let format = custom("00");
        assert_eq!(format.sections.len(), 1);
        assert_eq!(format.sections[0].tokens, vec![Token::Zero, Token::Zero]);
    }

    #[test]
    fn test_grouped_pattern_with_sections() {
        let format = custom("#,##0.00;(#,##0.00);'zero'");
        assert_eq!(format.sections.len(), 3);
        assert_eq!(
            format.sections[0].tokens,
            vec![
                Token::Digit,
                Token::Group,
                Token::Digit,
                Token::Digit,
                Token::Zero,
                Token::Point,
                Token::Zero,
                Token::Zero,
            ]
        );
        assert_eq!(format.sections[1].tokens.first(), Some(&Token::Literal("(".into())));
        assert_eq!(format.sections[2].tokens, vec![Token::Literal("zero".into())]);
    }

    #[test]
    fn test_exponent_tokens() {
        let format = custom("0.0e+00");
        assert_eq!(
            format.sections[0].tokens.last(),
            Some(&Token::Exponent {
                upper: false,
                always_sign: true,
                min_digits: 2,
            })
        );

        // An E without zeros is literal text
        let format = custom("0E");
        assert_eq!(format.sections[0].tokens[1], Token::Literal("E".into()));
    }

    #[test]
    fn test_escapes_and_quotes() {
        let format = custom("\\#0\"!\"");
        assert_eq!(
            format.sections[0].tokens,
            vec![
                Token::Literal("#".into()),
                Token::Zero,
                Token::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn test_rejected_patterns() {
        for bad in ["0}", "{0", "'open", "0\\", "0;0;0;0"] {
            assert!(
                matches!(parse(bad), Err(FormatError::Syntax { .. })),
                "Expected syntax error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_letter_words_are_custom() {
        // Only a single letter plus digits is a standard specifier
        let format = custom("abc");
        assert_eq!(format.sections[0].tokens.len(), 3);
    }
}
