//! The scalar scanner.
//!
//! [`scan`] consumes exactly one scalar token (literal, string, or number)
//! starting at the cursor and reports its classification plus the auxiliary
//! data the decoder needs: the content span and first-escape position for
//! strings, the parsed payload and lexeme start for numbers. Structural
//! tokens never reach the scanner; the dispatch table intercepts them.

use crate::error::{DecodeError, ErrorKind};

/// One scanned scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar {
    Null,
    True,
    False,
    /// Content spans `start` to the closing quote; `escape` is the offset of
    /// the first backslash, if any was seen.
    Str { start: usize, escape: Option<usize> },
    /// A literal without fraction or exponent. `start` marks the first byte
    /// of the lexeme.
    Int { value: i64, start: usize },
    /// A literal with a fraction or exponent, or an integer that overflowed
    /// `i64`.
    Float { value: f64, start: usize },
}

/// Consumes one scalar token at `pos`, returning the new cursor and the
/// classified token.
pub(crate) fn scan(buf: &[u8], pos: usize) -> Result<(usize, Scalar), DecodeError> {
    match buf.get(pos) {
        None => Err(DecodeError::new(
            ErrorKind::UnexpectedEndOfInput,
            buf.len(),
        )),
        Some(b'n') => expect_literal(buf, pos, b"null", Scalar::Null),
        Some(b't') => expect_literal(buf, pos, b"true", Scalar::True),
        Some(b'f') => expect_literal(buf, pos, b"false", Scalar::False),
        Some(b'"') => scan_string(buf, pos),
        Some(b'-' | b'0'..=b'9') => scan_number(buf, pos),
        Some(_) => Err(DecodeError::new(ErrorKind::InvalidCharacter, pos)),
    }
}

fn expect_literal(
    buf: &[u8],
    pos: usize,
    word: &'static [u8],
    token: Scalar,
) -> Result<(usize, Scalar), DecodeError> {
    for (i, &want) in word.iter().enumerate() {
        match buf.get(pos + i) {
            Some(&have) if have == want => {}
            Some(_) => return Err(DecodeError::new(ErrorKind::InvalidCharacter, pos + i)),
            None => {
                return Err(DecodeError::new(
                    ErrorKind::UnexpectedEndOfInput,
                    buf.len(),
                ))
            }
        }
    }
    Ok((pos + word.len(), token))
}

/// Scans from the opening quote through the closing quote. Escapes are not
/// decoded here; the position of the first backslash is recorded so the
/// decoder can pick the no-copy validation path when none occurred.
fn scan_string(buf: &[u8], pos: usize) -> Result<(usize, Scalar), DecodeError> {
    let start = pos + 1;
    let mut escape = None;
    let mut i = start;
    while let Some(&byte) = buf.get(i) {
        match byte {
            b'"' => return Ok((i + 1, Scalar::Str { start, escape })),
            b'\\' => {
                if escape.is_none() {
                    escape = Some(i);
                }
                // The escaped byte cannot terminate the string; its validity
                // is checked during unquoting.
                i += 2;
            }
            // Control bytes must be escaped.
            0x00..=0x1F => return Err(DecodeError::new(ErrorKind::InvalidCharacter, i)),
            _ => i += 1,
        }
    }
    Err(DecodeError::new(ErrorKind::UnexpectedEndOfInput, buf.len()))
}

fn scan_number(buf: &[u8], pos: usize) -> Result<(usize, Scalar), DecodeError> {
    let start = pos;
    let mut i = pos;
    let negative = buf[i] == b'-';
    if negative {
        i += 1;
    }

    // Integer part: a lone zero or a nonzero-led digit run.
    match buf.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(buf.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        Some(_) => return Err(DecodeError::new(ErrorKind::InvalidCharacter, i)),
        None => {
            return Err(DecodeError::new(
                ErrorKind::UnexpectedEndOfInput,
                buf.len(),
            ))
        }
    }
    let int_end = i;

    let mut is_float = false;
    if let Some(b'.') = buf.get(i) {
        is_float = true;
        i += 1;
        i = digit_run(buf, i)?;
    }
    if let Some(b'e' | b'E') = buf.get(i) {
        is_float = true;
        i += 1;
        if let Some(b'+' | b'-') = buf.get(i) {
            i += 1;
        }
        i = digit_run(buf, i)?;
    }

    if is_float {
        return float_token(buf, start, i);
    }

    // Accumulate negated so that i64::MIN round-trips; positive overflow is
    // caught by the final negation.
    let digits = &buf[if negative { start + 1 } else { start }..int_end];
    let mut value: i64 = 0;
    for &d in digits {
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(i64::from(d - b'0')))
        {
            Some(v) => v,
            None => return float_token(buf, start, i),
        };
    }
    let value = if negative {
        value
    } else {
        match value.checked_neg() {
            Some(v) => v,
            None => return float_token(buf, start, i),
        }
    };
    Ok((i, Scalar::Int { value, start }))
}

/// Requires at least one digit at `pos` and consumes the run.
fn digit_run(buf: &[u8], pos: usize) -> Result<usize, DecodeError> {
    let mut i = pos;
    match buf.get(i) {
        Some(b'0'..=b'9') => i += 1,
        Some(_) => return Err(DecodeError::new(ErrorKind::InvalidCharacter, i)),
        None => {
            return Err(DecodeError::new(
                ErrorKind::UnexpectedEndOfInput,
                buf.len(),
            ))
        }
    }
    while matches!(buf.get(i), Some(b'0'..=b'9')) {
        i += 1;
    }
    Ok(i)
}

fn float_token(buf: &[u8], start: usize, end: usize) -> Result<(usize, Scalar), DecodeError> {
    // The lexeme is validated ASCII.
    let text = unsafe { core::str::from_utf8_unchecked(&buf[start..end]) };
    match text.parse::<f64>() {
        Ok(value) => Ok((end, Scalar::Float { value, start })),
        Err(_) => Err(DecodeError::new(ErrorKind::InvalidCharacter, start)),
    }
}

#[cfg(test)]
mod tests {
    use super::{scan, Scalar};
    use crate::error::ErrorKind;

    fn ok(text: &str) -> (usize, Scalar) {
        scan(text.as_bytes(), 0).unwrap()
    }

    fn err(text: &str) -> (ErrorKind, usize) {
        let e = scan(text.as_bytes(), 0).unwrap_err();
        (e.kind(), e.offset())
    }

    #[test]
    fn literals() {
        assert_eq!(ok("null"), (4, Scalar::Null));
        assert_eq!(ok("true,"), (4, Scalar::True));
        assert_eq!(ok("false"), (5, Scalar::False));
        assert_eq!(err("nul"), (ErrorKind::UnexpectedEndOfInput, 3));
        assert_eq!(err("nulL"), (ErrorKind::InvalidCharacter, 3));
        assert_eq!(err("froze"), (ErrorKind::InvalidCharacter, 1));
    }

    #[test]
    fn strings_and_escape_positions() {
        assert_eq!(
            ok(r#""abc""#),
            (5, Scalar::Str { start: 1, escape: None })
        );
        assert_eq!(
            ok(r#""a\nb""#),
            (6, Scalar::Str { start: 1, escape: Some(2) })
        );
        // An escaped quote does not terminate the string.
        assert_eq!(
            ok(r#""a\"b""#),
            (6, Scalar::Str { start: 1, escape: Some(2) })
        );
        assert_eq!(err("\"abc"), (ErrorKind::UnexpectedEndOfInput, 4));
        assert_eq!(err("\"ab\\"), (ErrorKind::UnexpectedEndOfInput, 4));
        assert_eq!(err("\"a\x01b\""), (ErrorKind::InvalidCharacter, 2));
    }

    #[test]
    fn integers() {
        assert_eq!(ok("0"), (1, Scalar::Int { value: 0, start: 0 }));
        assert_eq!(ok("-42,"), (3, Scalar::Int { value: -42, start: 0 }));
        assert_eq!(
            ok("9223372036854775807"),
            (19, Scalar::Int { value: i64::MAX, start: 0 })
        );
        assert_eq!(
            ok("-9223372036854775808"),
            (20, Scalar::Int { value: i64::MIN, start: 0 })
        );
    }

    #[test]
    fn integer_overflow_becomes_float() {
        let (end, token) = ok("9223372036854775808");
        assert_eq!(end, 19);
        assert_eq!(
            token,
            Scalar::Float { value: 9.223_372_036_854_776e18, start: 0 }
        );
    }

    #[test]
    fn floats() {
        assert_eq!(ok("1.5"), (3, Scalar::Float { value: 1.5, start: 0 }));
        assert_eq!(ok("-0.25"), (5, Scalar::Float { value: -0.25, start: 0 }));
        assert_eq!(ok("1e2"), (3, Scalar::Float { value: 100.0, start: 0 }));
        assert_eq!(ok("1E-2"), (4, Scalar::Float { value: 0.01, start: 0 }));
        let (_, token) = ok("1e400");
        assert_eq!(token, Scalar::Float { value: f64::INFINITY, start: 0 });
    }

    #[test]
    fn leading_zero_stops_the_token() {
        assert_eq!(ok("01"), (1, Scalar::Int { value: 0, start: 0 }));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(err("-"), (ErrorKind::UnexpectedEndOfInput, 1));
        assert_eq!(err("-x"), (ErrorKind::InvalidCharacter, 1));
        assert_eq!(err("1."), (ErrorKind::UnexpectedEndOfInput, 2));
        assert_eq!(err("1.e5"), (ErrorKind::InvalidCharacter, 2));
        assert_eq!(err("1e"), (ErrorKind::UnexpectedEndOfInput, 2));
        assert_eq!(err("1e+"), (ErrorKind::UnexpectedEndOfInput, 3));
        assert_eq!(err("2e~"), (ErrorKind::InvalidCharacter, 2));
    }

    #[test]
    fn rejects_non_scalar_leaders() {
        assert_eq!(err("@"), (ErrorKind::InvalidCharacter, 0));
        assert_eq!(err(""), (ErrorKind::UnexpectedEndOfInput, 0));
    }
}
