//! a module turns an equation string like "5 * X^0 + 4 * X^1 = 4 * X^0" into a reduced form: a map power -> coefficient
//! of  left side - right side = 0
//!# Example
//! ```
//! use computor::polynomial::parse_equation::reduce_equation;
//! let reduced = reduce_equation("5 * X^0 + 4 * X^1 = 4 * X^0").unwrap();
//! assert_eq!(reduced.coefficient(0), 1.0);
//! assert_eq!(reduced.coefficient(1), 4.0);
//! ```
//                 reduction diagram
//      "5 * X^0 + 4 * X^1 = 4 * X^0"
//      |       left        |  right  |
//      |___________________|_________|
//      | strip whitespace, find terms|
//      |  5*X^0  |  +4*X^1 |  4*X^0  |
//      |_________|_________|_________|
//      |  sign, then term structure  |
//      | (+1,5,0)| (+1,4,1)|(+1,4,0) |
//      |_________|_________|_________|
//      |  left adds, right subtracts |
//      |      {0: 1.0, 1: 4.0}       |
use crate::polynomial::errors::{ParseError, Side};
use crate::polynomial::reduced_form::ReducedForm;
use log::info;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{digit0, digit1},
    combinator::{all_consuming, map_res, opt},
    error::{Error, ErrorKind},
    sequence::{pair, preceded},
};
use regex::Regex;
use std::sync::LazyLock;

/// optional sign, then either a term with X and an explicit power (the coefficient and '*' and '^' are
/// optional so that near-miss terms are caught and reported by parse_term) or a bare number
static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?(?:\d*\.?\d*\*?X\^?\d+|\d+\.?\d*|\.\d+)").expect("term pattern must compile")
});

/// digits, optional decimal point, digits - at least one digit somewhere
fn parse_number(input: &str) -> IResult<&str, f64> {
    let mut parser = pair(digit0, opt(preceded(tag("."), digit0)));
    let (rest, (integer_part, fraction_part)) = parser.parse(input)?;
    let fraction_part = fraction_part.unwrap_or("");
    if integer_part.is_empty() && fraction_part.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Digit)));
    }
    let integer_part = if integer_part.is_empty() { "0" } else { integer_part };
    let fraction_part = if fraction_part.is_empty() { "0" } else { fraction_part };
    match format!("{}.{}", integer_part, fraction_part).parse::<f64>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(Error::new(input, ErrorKind::Float))),
    }
}

fn parse_power_digits(input: &str) -> IResult<&str, u32> {
    let mut parser = map_res(digit1, |s: &str| s.parse::<u32>());
    parser.parse(input)
}

fn coefficient_of(text: &str) -> Option<f64> {
    all_consuming(parse_number)
        .parse(text)
        .ok()
        .map(|(_, value)| value)
}

fn power_of(text: &str) -> Option<u32> {
    all_consuming(parse_power_digits)
        .parse(text)
        .ok()
        .map(|(_, power)| power)
}

/// parse one unsigned term: "X^2", "3.5*X^2" or a bare constant "7" (read as 7*X^0)
/// the sign must be removed by the caller
pub fn parse_term(term: &str) -> Result<(f64, u32), ParseError> {
    if let Some(power_str) = term.strip_prefix("X^") {
        let power = power_of(power_str).ok_or_else(|| ParseError::InvalidPower {
            term: term.to_string(),
        })?;
        return Ok((1.0, power));
    }
    match term.split_once("*X^") {
        Some((coeff_str, power_str)) => {
            let coefficient =
                coefficient_of(coeff_str).ok_or_else(|| ParseError::InvalidCoefficient {
                    term: term.to_string(),
                })?;
            let power = power_of(power_str).ok_or_else(|| ParseError::InvalidPower {
                term: term.to_string(),
            })?;
            Ok((coefficient, power))
        }
        None if !term.is_empty() && term.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            let coefficient =
                coefficient_of(term).ok_or_else(|| ParseError::InvalidCoefficient {
                    term: term.to_string(),
                })?;
            Ok((coefficient, 0))
        }
        None => Err(ParseError::MalformedTerm {
            term: term.to_string(),
        }),
    }
}

/// split a token into its sign and the unsigned rest; only one sign character is consumed
pub fn split_sign(token: &str) -> (f64, &str) {
    if let Some(rest) = token.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = token.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, token)
    }
}

/// parse a token as found in the equation, sign included
pub fn parse_signed_term(token: &str) -> Result<(f64, u32), ParseError> {
    let (sign, body) = split_sign(token);
    let (coefficient, power) = parse_term(body)?;
    Ok((sign * coefficient, power))
}

// text the pattern did not cover is run through the term parser to get the most precise error
fn uncovered_text_error(text: &str) -> ParseError {
    match parse_signed_term(text) {
        Err(e) => e,
        Ok(_) => ParseError::MalformedTerm {
            term: text.to_string(),
        },
    }
}

/// all terms of one side of the equation as (signed coefficient, power); an empty side has no terms
pub fn side_terms(text: &str, side: Side) -> Result<Vec<(f64, u32)>, ParseError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut terms = Vec::new();
    let mut cursor = 0;
    for found in TERM_PATTERN.find_iter(&compact) {
        if found.start() > cursor {
            return Err(uncovered_text_error(&compact[cursor..found.start()]));
        }
        let token = found.as_str();
        // terms after the first one must be joined by a sign
        if found.start() > 0 && !token.starts_with(['+', '-']) {
            return Err(ParseError::MalformedTerm {
                term: token.to_string(),
            });
        }
        terms.push(parse_signed_term(token)?);
        cursor = found.end();
    }
    if cursor < compact.len() {
        return Err(uncovered_text_error(&compact[cursor..]));
    }
    info!("{} side: {} terms", side, terms.len());
    Ok(terms)
}

/// reduce "left = right" to the coefficients of "left - right = 0"
pub fn reduce_equation(equation: &str) -> Result<ReducedForm, ParseError> {
    let sides: Vec<&str> = equation.split('=').collect();
    if sides.len() != 2 {
        return Err(ParseError::MissingEqualsSign {
            found: sides.len() - 1,
        });
    }
    let mut reduced = ReducedForm::new();
    for (side, text) in [(Side::Left, sides[0]), (Side::Right, sides[1])] {
        let terms = side_terms(text, side)?;
        for (coefficient, power) in terms {
            reduced.add_term(power, side.factor() * coefficient);
        }
    }
    info!("reduced coefficients: {:?}", reduced.coefficients);
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_term_forms() {
        assert_eq!(parse_term("X^2").unwrap(), (1.0, 2));
        assert_eq!(parse_term("3.5*X^2").unwrap(), (3.5, 2));
        assert_eq!(parse_term("4*X^0").unwrap(), (4.0, 0));
        assert_eq!(parse_term("X^12").unwrap(), (1.0, 12));
        assert_eq!(parse_term(".5*X^1").unwrap(), (0.5, 1));
        assert_eq!(parse_term("7").unwrap(), (7.0, 0));
        assert_eq!(parse_term("0").unwrap(), (0.0, 0));
    }

    #[test]
    fn test_parse_term_errors() {
        assert!(matches!(parse_term("X^a"), Err(ParseError::InvalidPower { .. })));
        assert!(matches!(parse_term("X^"), Err(ParseError::InvalidPower { .. })));
        assert!(matches!(parse_term("2*X^1.5"), Err(ParseError::InvalidPower { .. })));
        assert!(matches!(
            parse_term("2*X^99999999999"),
            Err(ParseError::InvalidPower { .. })
        ));
        assert!(matches!(
            parse_term("1.2.3*X^0"),
            Err(ParseError::InvalidCoefficient { .. })
        ));
        assert!(matches!(parse_term("*X^1"), Err(ParseError::InvalidCoefficient { .. })));
        assert!(matches!(parse_term("a*X^1"), Err(ParseError::InvalidCoefficient { .. })));
        assert!(matches!(parse_term("."), Err(ParseError::InvalidCoefficient { .. })));
        assert!(matches!(parse_term("3X^2"), Err(ParseError::MalformedTerm { .. })));
        assert!(matches!(parse_term("X"), Err(ParseError::MalformedTerm { .. })));
        assert!(matches!(parse_term(""), Err(ParseError::MalformedTerm { .. })));
    }

    #[test]
    fn test_sign_is_resolved_once() {
        assert_eq!(parse_signed_term("-X^2").unwrap(), (-1.0, 2));
        assert_eq!(parse_signed_term("+X^2").unwrap(), (1.0, 2));
        assert_eq!(parse_signed_term("-3*X^1").unwrap(), (-3.0, 1));
        assert!(parse_signed_term("--3*X^1").is_err());
    }

    #[test]
    fn test_side_terms() {
        let terms = side_terms("5 * X^0 + 4 * X^1 - X^2", Side::Left).unwrap();
        assert_eq!(terms, vec![(5.0, 0), (4.0, 1), (-1.0, 2)]);

        let terms = side_terms("-2.5*X^10", Side::Right).unwrap();
        assert_eq!(terms, vec![(-2.5, 10)]);
    }

    #[test]
    fn test_side_terms_reject_uncovered_text() {
        assert!(matches!(
            side_terms("5 * X^0 + X^a", Side::Left),
            Err(ParseError::InvalidPower { .. })
        ));
        assert!(matches!(
            side_terms("5 * X^0 +", Side::Left),
            Err(ParseError::MalformedTerm { .. })
        ));
        assert!(matches!(
            side_terms("5 * X^0 + X", Side::Left),
            Err(ParseError::MalformedTerm { .. })
        ));
        assert!(matches!(
            side_terms("5 * Y^0", Side::Left),
            Err(ParseError::MalformedTerm { .. })
        ));
        // a second term without a joining sign
        assert!(matches!(
            side_terms("1.5.2*X^1", Side::Left),
            Err(ParseError::MalformedTerm { .. })
        ));
    }

    #[test]
    fn test_parse_number_lexemes() {
        assert_eq!(parse_number("8").unwrap(), ("", 8.0));
        assert_eq!(parse_number("3.5").unwrap(), ("", 3.5));
        assert_eq!(parse_number("12.25*X^1").unwrap(), ("*X^1", 12.25));
        assert_eq!(parse_number("1.").unwrap(), ("", 1.0));
        assert_eq!(parse_number(".75").unwrap(), ("", 0.75));
        assert!(parse_number(".").is_err());
        assert!(parse_number("*X^1").is_err());
        assert_eq!(coefficient_of("1.2.3"), None);
        assert_eq!(coefficient_of("4"), Some(4.0));
    }

    #[test]
    fn test_integer_and_decimal_coefficients() {
        assert_eq!(parse_term("8*X^3").unwrap(), (8.0, 3));
        assert_eq!(parse_term("0.125*X^2").unwrap(), (0.125, 2));
        assert_eq!(parse_signed_term("-12").unwrap(), (-12.0, 0));
        let reduced = reduce_equation("5 * X^0 = 5 * X^0").unwrap();
        assert_eq!(reduced.coefficient(0), 0.0);
    }

    #[test]
    fn test_empty_side_has_no_terms() {
        assert_eq!(side_terms("   ", Side::Right).unwrap(), vec![]);
        let reduced = reduce_equation("X^1 =").unwrap();
        assert_eq!(reduced.coefficient(1), 1.0);
        assert_eq!(reduced.to_string(), "1.00 * X^1 = 0");
        let reduced = reduce_equation("= 2 * X^0").unwrap();
        assert_eq!(reduced.coefficient(0), -2.0);
    }

    #[test]
    fn test_reduce_equation_moves_right_side() {
        let reduced = reduce_equation("5 * X^0 + 4 * X^1 = 4 * X^0").unwrap();
        assert_relative_eq!(reduced.coefficient(0), 1.0);
        assert_relative_eq!(reduced.coefficient(1), 4.0);
        assert_eq!(reduced.coefficient(2), 0.0);

        let reduced = reduce_equation("X^2 = -3 * X^2").unwrap();
        assert_relative_eq!(reduced.coefficient(2), 4.0);
    }

    #[test]
    fn test_reduce_equation_equals_sign() {
        assert_eq!(
            reduce_equation("5 * X^0 + 4 * X^1"),
            Err(ParseError::MissingEqualsSign { found: 0 })
        );
        assert_eq!(
            reduce_equation("X^1 = X^0 = X^2"),
            Err(ParseError::MissingEqualsSign { found: 2 })
        );
    }

    #[test]
    fn test_reduce_equation_is_order_independent() {
        let a = reduce_equation("1 * X^0 - 2.5 * X^1 + 3 * X^2 = X^1 - 4 * X^0").unwrap();
        let b = reduce_equation("3 * X^2 + 1 * X^0 - 2.5 * X^1 = -4 * X^0 + X^1").unwrap();
        assert_eq!(a.coefficients.keys().collect::<Vec<_>>(), b.coefficients.keys().collect::<Vec<_>>());
        for (power, value) in a.coefficients.iter() {
            assert_relative_eq!(*value, b.coefficient(*power), epsilon = 1e-12);
        }
    }
}
