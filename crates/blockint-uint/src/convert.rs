//! Decimal and binary text conversion.

use std::fmt;
use std::str::FromStr;

use blockint_core::{Block, ParseError};

use crate::biguint::BigUint;

/// Decimal digits folded into one native word per parsing step.
const CHUNK_DIGITS: usize = 8;

/// `10^CHUNK_DIGITS`, the base each chunk is scaled by.
const CHUNK_BASE: Block = 100_000_000;

impl BigUint {
    /// Parse an unsigned decimal string.
    ///
    /// Leading zeros are accepted. Signs, whitespace and any other
    /// non-digit bytes are rejected with [`ParseError::InvalidDigit`]; an
    /// empty string is [`ParseError::Empty`].
    ///
    /// ```
    /// use blockint_uint::BigUint;
    ///
    /// let v = BigUint::from_decimal("18446744073709551616").unwrap();
    /// assert_eq!(v.blocks(), &[0, 1]);
    /// ```
    pub fn from_decimal(s: &str) -> Result<Self, ParseError> {
        Self::parse_bytes(s.as_bytes())
    }

    pub(crate) fn parse_bytes(digits: &[u8]) -> Result<Self, ParseError> {
        if digits.is_empty() {
            tracing::debug!("rejecting empty decimal input");
            return Err(ParseError::Empty);
        }
        if let Some(index) = digits.iter().position(|b| !b.is_ascii_digit()) {
            let byte = digits[index];
            tracing::debug!(index, byte, "rejecting decimal input");
            return Err(ParseError::InvalidDigit { index, byte });
        }

        // Chunks are taken from the least significant end, each scaled by
        // the running power of 10^8.
        let mut value = BigUint::zero();
        let mut factor = BigUint::one();
        let base = BigUint::from_block(CHUNK_BASE);
        let mut chunks = digits.rchunks(CHUNK_DIGITS).peekable();
        while let Some(chunk) = chunks.next() {
            let word = chunk
                .iter()
                .fold(0, |acc: Block, &d| acc * 10 + Block::from(d - b'0'));
            if word != 0 {
                let mut term = BigUint::from_block(word);
                term *= &factor;
                value += &term;
            }
            if chunks.peek().is_some() {
                factor *= &base;
            }
        }
        Ok(value)
    }

    /// Render as a decimal string without leading zeros.
    pub fn to_decimal_string(&self) -> String {
        if self.is_trivial() {
            return self.blocks[0].to_string();
        }

        let ten = BigUint::from_block(10);
        let mut digits = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (quotient, remainder) = rest.div_mod(&ten).expect("divisor ten is nonzero");
            // A remainder below ten is always a single block.
            digits.push(b'0' + remainder.blocks[0] as u8);
            rest = quotient;
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }

    /// Render as `0b` followed by every block, most significant first, each
    /// zero-padded to the full block width.
    ///
    /// ```
    /// use blockint_uint::BigUint;
    ///
    /// let s = BigUint::from_blocks(&[1, 2]).to_binary_string();
    /// assert_eq!(s.len(), 2 + 128);
    /// assert!(s.ends_with("01"));
    /// ```
    pub fn to_binary_string(&self) -> String {
        let mut out = String::with_capacity(2 + self.blocks.len() * 64);
        out.push_str("0b");
        for block in self.blocks.iter().rev() {
            out.push_str(&format!("{block:064b}"));
        }
        out
    }
}

impl FromStr for BigUint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}
