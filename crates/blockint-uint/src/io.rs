//! Reading values from byte streams.

use std::io::BufRead;

use blockint_core::ReadError;

use crate::biguint::BigUint;

impl BigUint {
    /// Read one whitespace-delimited decimal token from `reader` and
    /// replace `self` with it.
    ///
    /// Leading ASCII whitespace is skipped; the token ends at the next
    /// whitespace byte, which is left in the reader, or at end of stream.
    /// On any error `self` is unchanged.
    ///
    /// ```
    /// use blockint_uint::BigUint;
    ///
    /// let mut input = "  12345 678".as_bytes();
    /// let mut v = BigUint::zero();
    /// v.read_from(&mut input).unwrap();
    /// assert_eq!(v, BigUint::from(12345u64));
    /// ```
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError> {
        skip_whitespace(reader)?;
        let token = read_token(reader)?;
        if token.is_empty() {
            return Err(ReadError::UnexpectedEof);
        }
        *self = BigUint::parse_bytes(&token)?;
        Ok(())
    }
}

fn skip_whitespace<R: BufRead>(reader: &mut R) -> Result<(), ReadError> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let done = skip < buf.len();
        reader.consume(skip);
        if done {
            return Ok(());
        }
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, ReadError> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(token);
        }
        let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&buf[..take]);
        let done = take < buf.len();
        reader.consume(take);
        if done {
            return Ok(token);
        }
    }
}
