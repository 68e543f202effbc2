//! Canonical-text round-trip tests
//!
//! Re-classifying a measurement's own canonical rendering must yield an
//! equivalent measurement, for every notation variant.

use super::classify_ok;

fn assert_roundtrip(input: &str) {
    let first = classify_ok(input);
    let canonical = first.canonical_text();
    let second = classify_ok(&canonical);
    assert_eq!(
        first, second,
        "round trip diverged for '{}' via '{}'",
        input, canonical
    );
}

#[test]
fn test_roundtrip_coded() {
    assert_roundtrip("HM - Hand movement");
    assert_roundtrip("ni - no improvement");
}

#[test]
fn test_roundtrip_meter_snellen() {
    assert_roundtrip("6/6");
    assert_roundtrip("6/12");
    assert_roundtrip("5/10"); // explicit magnitude, carries the m suffix
}

#[test]
fn test_roundtrip_feet_snellen() {
    assert_roundtrip("20/40");
    assert_roundtrip("20/40ft");
    assert_roundtrip("12/24"); // explicit feet via the >6 fallback
}

#[test]
fn test_roundtrip_forced_meter_snellen() {
    // Forced meters on a feet-anchored numerator must survive the trip
    assert_roundtrip("20/40m");
}

#[test]
fn test_roundtrip_decimal() {
    assert_roundtrip("0.3dec");
    assert_roundtrip("1dec"); // stays Decimal only when not a letters count
}

#[test]
fn test_roundtrip_letters_read() {
    assert_roundtrip("5");
    assert_roundtrip("38");
}

#[test]
fn test_roundtrip_logmar_direct() {
    assert_roundtrip("0.18");
    assert_roundtrip("-0.1");
    assert_roundtrip("3");
}

#[test]
fn test_roundtrip_near_vision() {
    assert_roundtrip("N8");
    assert_roundtrip("n30");
    assert_roundtrip("3J");
    assert_roundtrip("14j");
}

#[test]
fn test_canonical_text_shapes() {
    assert_eq!(classify_ok("6/6").canonical_text(), "6/6");
    assert_eq!(classify_ok("20/40ft").canonical_text(), "20/40ft");
    assert_eq!(classify_ok("n8").canonical_text(), "N8");
    assert_eq!(classify_ok("3j").canonical_text(), "3J");
    assert_eq!(classify_ok("0,3dec").canonical_text(), "0.3dec");
    assert_eq!(classify_ok("5").canonical_text(), "5");
}
