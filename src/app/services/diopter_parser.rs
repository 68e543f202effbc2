//! Lens power ("diopter") shorthand parsing
//!
//! Optometric shorthand writes fractional diopter steps as a letter after a
//! signed integer: `1q` is 1.25, `1h` is 1.5, `-3t` is -3.75. The sign of
//! the fractional step follows the sign of the base integer. Plain signed
//! decimals pass through unchanged.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::{DiopterShorthand, DiopterValue};
use crate::{Error, Result};

static SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?\d+)([qhtQHT])$").expect("shorthand pattern is valid"));

static PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("plain number pattern is valid"));

/// Parse a diopter value with optional q/h/t shorthand
pub fn parse_diopter(text: &str) -> Result<DiopterValue> {
    let input = text.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Some(caps) = SHORTHAND.captures(input) {
        let base: f64 = caps[1]
            .parse()
            .map_err(|_| Error::invalid_format("Invalid diopter format"))?;
        let letter = caps[2]
            .chars()
            .next()
            .and_then(DiopterShorthand::from_char)
            .ok_or_else(|| Error::invalid_format("Invalid diopter format"))?;

        let step = if base >= 0.0 {
            letter.step()
        } else {
            -letter.step()
        };
        let value = base + step;
        debug!(base, symbol = %letter.symbol(), value, "parsed diopter shorthand");
        return Ok(DiopterValue {
            value,
            shorthand: Some(letter),
        });
    }

    if PLAIN.is_match(input) {
        let value: f64 = input
            .parse()
            .map_err(|_| Error::invalid_format("Invalid diopter format"))?;
        return Ok(DiopterValue {
            value,
            shorthand: None,
        });
    }

    Err(Error::invalid_format("Invalid diopter format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_shorthand() {
        let d = parse_diopter("1q").unwrap();
        assert_eq!(d.value, 1.25);
        assert_eq!(d.shorthand, Some(DiopterShorthand::Quarter));
    }

    #[test]
    fn test_half_shorthand() {
        let d = parse_diopter("2h").unwrap();
        assert_eq!(d.value, 2.5);
        assert_eq!(d.shorthand, Some(DiopterShorthand::Half));
    }

    #[test]
    fn test_three_quarter_shorthand_negative() {
        // Step sign follows the base sign
        let d = parse_diopter("-3t").unwrap();
        assert_eq!(d.value, -3.75);
        assert_eq!(d.shorthand, Some(DiopterShorthand::ThreeQuarter));
    }

    #[test]
    fn test_shorthand_case_insensitive() {
        assert_eq!(parse_diopter("1Q").unwrap().value, 1.25);
        assert_eq!(parse_diopter("+2H").unwrap().value, 2.5);
    }

    #[test]
    fn test_plain_values() {
        let d = parse_diopter("-1.75").unwrap();
        assert_eq!(d.value, -1.75);
        assert_eq!(d.shorthand, None);

        assert_eq!(parse_diopter("+3").unwrap().value, 3.0);
        assert_eq!(parse_diopter("0").unwrap().value, 0.0);
    }

    #[test]
    fn test_invalid_formats() {
        for input in ["1x", "q", "1.5q", "--2", "one", "1 q"] {
            let err = parse_diopter(input).unwrap_err();
            match err {
                Error::InvalidFormat { message } => {
                    assert!(message.contains("Invalid diopter format"), "for {}", input)
                }
                other => panic!("expected InvalidFormat for {}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_diopter("  ").unwrap_err(), Error::EmptyInput);
    }
}
