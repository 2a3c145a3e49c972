//! Worked examples with independently known results.

use blockint_test_utils::fixtures::{self, FACTORIAL_30, TEN_POW_40, TWO_POW_128};
use blockint_uint::{ArithError, BigUint, ParseError};

#[test]
fn ten_pow_twelve_squared() {
    let a = BigUint::from(1_000_000_000_000u64);
    let b: BigUint = "1000000000000".parse().unwrap();
    assert_eq!((a * b).to_string(), "1000000000000000000000000");
}

#[test]
fn two_pow_sixty_four_has_two_blocks() {
    let v: BigUint = "18446744073709551616".parse().unwrap();
    assert_eq!(v.block_len(), 2);
    assert_eq!(v.blocks(), &[0, 1]);
}

#[test]
fn failures_surface_as_errors() {
    let a = BigUint::from(5u64);
    assert_eq!(a.div_mod(&BigUint::zero()), Err(ArithError::DivisionByZero));
    assert_eq!(a.checked_sub(&BigUint::from(6u64)), None);
    assert_eq!(
        BigUint::from_blocks(&[0, 1]).to_u64(),
        Err(ArithError::Overflow { blocks: 2 })
    );
    assert_eq!(
        "12_000".parse::<BigUint>(),
        Err(ParseError::InvalidDigit { index: 2, byte: b'_' })
    );
}

#[test]
fn factorial_digits() {
    assert_eq!(fixtures::factorial(30).to_string(), FACTORIAL_30);
}

#[test]
fn factorial_divides_back_down() {
    let mut v = fixtures::factorial(40);
    for k in (2..=40u64).rev() {
        let (q, r) = v.div_mod(&BigUint::from(k)).unwrap();
        assert!(r.is_zero(), "{k} does not divide");
        v = q;
    }
    assert_eq!(v, BigUint::one());
}

#[test]
fn powers_print_as_expected() {
    let two_128 = BigUint::one() << 128;
    assert_eq!(two_128.to_string(), TWO_POW_128);
    assert_eq!(two_128.blocks(), &[0, 0, 1]);

    let ten_40 = fixtures::pow(&BigUint::from(10u64), 40);
    assert_eq!(ten_40.to_string(), TEN_POW_40);
    assert_eq!(ten_40.log2(), Some(132));
}

#[test]
fn all_ones_minus_one_round_trip() {
    let ones = fixtures::all_ones(4);
    let mut v = ones.clone();
    v.increment();
    v.try_decrement().unwrap();
    assert_eq!(v, ones);
    assert_eq!(v.bits(), 256);
}

#[test]
fn binary_string_of_two_blocks() {
    let v = BigUint::from_blocks(&[1, 1]);
    let s = v.to_binary_string();
    assert_eq!(&s[..2], "0b");
    assert_eq!(s.matches('1').count(), 2);
    assert_eq!(s.len(), 2 + 128);
}

#[test]
fn stream_reads_replace_value() {
    let mut input = "  42\n100000000000000000000  junk".as_bytes();
    let mut v = BigUint::zero();
    v.read_from(&mut input).unwrap();
    assert_eq!(v, BigUint::from(42u64));
    v.read_from(&mut input).unwrap();
    assert_eq!(v.to_string(), "100000000000000000000");
    assert!(v.read_from(&mut input).is_err());
    assert_eq!(v.to_string(), "100000000000000000000");
}
