//! Spelling of known numbers
//!
//! Each case pins the exact English text for one number, covering every branch of
//! chunk spelling and the joining of magnitudes.

use num_bigint::BigInt;
use rstest::rstest;
use spellnum::spell::{spell, to_words, SpellError};
use std::str::FromStr;

fn words(n: &str) -> String {
    to_words(&BigInt::from_str(n).unwrap()).unwrap()
}

#[rstest]
#[case("0", "zero")]
#[case("5", "five")]
#[case("15", "fifteen")]
#[case("20", "twenty")]
#[case("21", "twenty one")]
#[case("40", "forty")]
#[case("100", "one hundred")]
#[case("101", "one hundred one")]
#[case("110", "one hundred ten")]
#[case("115", "one hundred fifteen")]
#[case("119", "one hundred nineteen")]
#[case("999", "nine hundred ninety nine")]
fn test_under_one_thousand(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(words(input), expected);
}

#[rstest]
#[case("1000", "one thousand")]
#[case("1234", "one thousand, two hundred thirty four")]
#[case("1000000", "one million")]
#[case("1000001", "one million, one")]
#[case("1010", "one thousand, ten")]
#[case("20000020", "twenty million, twenty")]
#[case("1000000000", "one billion")]
#[case(
    "123456789",
    "one hundred twenty three million, four hundred fifty six thousand, seven hundred eighty nine"
)]
fn test_magnitudes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(words(input), expected);
}

#[test]
fn test_every_label_in_order() {
    let expected = [
        "one sexdecillion",
        "one quindecillion",
        "one quattuordecillion",
        "one tredecillion",
        "one duodecillion",
        "one undecillion",
        "one decillion",
        "one nonillion",
        "one octillion",
        "one septillion",
        "one sextillion",
        "one quintillion",
        "one quadrillion",
        "one trillion",
        "one billion",
        "one million",
        "one thousand",
        "one",
    ];
    assert_eq!(words(&"001".repeat(18)), expected.join(", "));
}

#[test]
fn test_largest_supported_number() {
    let spelled = words(&"9".repeat(54));
    assert!(spelled.starts_with("nine hundred ninety nine sexdecillion, "));
    assert!(spelled.ends_with(", nine hundred ninety nine"));
}

#[test]
fn test_overflow_at_ten_to_the_54th() {
    let value = BigInt::from_str(&format!("1{}", "0".repeat(54))).unwrap();
    assert_eq!(
        spell(&value).unwrap_err(),
        SpellError::MagnitudeOverflow { digits: 55 }
    );
}
