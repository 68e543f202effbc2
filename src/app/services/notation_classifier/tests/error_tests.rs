//! Error-path tests for the classifier

use super::classify_err;
use crate::Error;

#[test]
fn test_empty_input() {
    assert_eq!(classify_err(""), Error::EmptyInput);
    assert_eq!(classify_err("   "), Error::EmptyInput);
    assert_eq!(classify_err("\t\n"), Error::EmptyInput);
}

#[test]
fn test_too_many_slashes() {
    assert_eq!(
        classify_err("6/6/6"),
        Error::invalid_format("Too many slashes")
    );
    assert_eq!(
        classify_err("20/40/60/80"),
        Error::invalid_format("Too many slashes")
    );
}

#[test]
fn test_incomplete_fraction() {
    assert_eq!(
        classify_err("6/"),
        Error::invalid_format("Incomplete fraction")
    );
    assert_eq!(
        classify_err("/40"),
        Error::invalid_format("Incomplete fraction")
    );
}

#[test]
fn test_fraction_not_numeric() {
    assert_eq!(
        classify_err("six/six"),
        Error::invalid_format("Fraction not numeric")
    );
}

#[test]
fn test_unknown_n_font_size() {
    assert_eq!(classify_err("N7"), Error::unrecognized_code("N-font", "7"));
    assert_eq!(
        classify_err("N100"),
        Error::unrecognized_code("N-font", "100")
    );
}

#[test]
fn test_unknown_jaeger_size() {
    assert_eq!(classify_err("0J"), Error::unrecognized_code("Jaeger", "0"));
    assert_eq!(
        classify_err("15J"),
        Error::unrecognized_code("Jaeger", "15")
    );
}

#[test]
fn test_invalid_characters() {
    assert_eq!(
        classify_err("hello"),
        Error::invalid_format("Invalid characters for numeric input")
    );
    assert_eq!(
        classify_err("1+1"),
        Error::invalid_format("Invalid characters for numeric input")
    );
}

#[test]
fn test_unparseable_numeric() {
    assert_eq!(
        classify_err("1.2.3"),
        Error::invalid_format("Cannot parse numeric")
    );
}

#[test]
fn test_unknown_coded_term_is_not_coded() {
    // An abbreviation alone is not a whole-string coded match; it falls to
    // the numeric fallback and fails there.
    assert_eq!(
        classify_err("HM"),
        Error::invalid_format("Invalid characters for numeric input")
    );
}

#[test]
fn test_errors_are_values_not_panics() {
    // A grab-bag of garbage; everything must come back as Err, never panic
    for input in [
        "", " ", "/", "//", "N", "J", "Nx", "xJ", "dec", "m", "ft", "-", ",", ".",
        "😀", "6/6/", "N-8", "--1", "1..2dec",
    ] {
        let _ = crate::classify(input).unwrap_err();
    }
}
