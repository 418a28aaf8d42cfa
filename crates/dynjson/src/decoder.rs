//! The stack-driven value decoder.
//!
//! One loop fuses three concerns: the whitespace/token fast path, the
//! scalar scanner, and the frame stack that tracks container nesting.
//! Every iteration either commits one completed value downward or pushes
//! frames for a newly opened container or pending member; errors leave
//! through a single exit that parks the cursor on the offending byte.

use alloc::string::{String, ToString};

use crate::dispatch::{classify, skip_space, TokenKind};
use crate::error::{DecodeError, ErrorKind};
use crate::options::DecodeOptions;
use crate::scanner::{self, Scalar};
use crate::stack::{DecodeStack, Frame};
use crate::unquote;
use crate::value::{Array, Map, Value};

/// Capacity reserved when an array opens, so short arrays never regrow.
const ARRAY_INIT_CAPACITY: usize = 16;

/// Decodes a buffer holding exactly one JSON value (surrounding whitespace
/// permitted).
///
/// # Errors
///
/// Fails with the classified error and the byte offset of the offender,
/// including [`ErrorKind::InvalidCharacter`] for any non-whitespace byte
/// after the value.
pub fn from_slice(buf: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(buf, options);
    let value = decoder.decode()?;
    let rest = skip_space(buf, decoder.position());
    if rest < buf.len() {
        return Err(DecodeError::new(ErrorKind::InvalidCharacter, rest));
    }
    Ok(value)
}

/// Decodes a string holding exactly one JSON value. See [`from_slice`].
///
/// # Errors
///
/// See [`from_slice`].
pub fn from_str(text: &str, options: DecodeOptions) -> Result<Value, DecodeError> {
    from_slice(text.as_bytes(), options)
}

/// A cursor-driven decoder over a complete input buffer.
///
/// Each [`decode`](Decoder::decode) call consumes leading whitespace plus
/// exactly one value and leaves the cursor immediately after it, so
/// concatenated values decode with repeated calls:
///
/// ```
/// use dynjson::{DecodeOptions, Decoder, Value};
///
/// let mut decoder = Decoder::new(b"1 2", DecodeOptions::default());
/// assert_eq!(decoder.decode().unwrap(), Value::Double(1.0));
/// assert_eq!(decoder.decode().unwrap(), Value::Double(2.0));
/// assert_eq!(decoder.position(), 3);
/// ```
pub struct Decoder<'buf> {
    buf: &'buf [u8],
    pos: usize,
    options: DecodeOptions,
}

impl<'buf> Decoder<'buf> {
    #[must_use]
    pub fn new(buf: &'buf [u8], options: DecodeOptions) -> Self {
        Self::with_position(buf, 0, options)
    }

    /// Starts decoding at `pos` instead of the beginning of the buffer.
    #[must_use]
    pub fn with_position(buf: &'buf [u8], pos: usize, options: DecodeOptions) -> Self {
        Self { buf, pos, options }
    }

    /// The current byte offset: just past the last decoded value, or on the
    /// offending byte after a failed decode.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decodes exactly one value, advancing the cursor past it. Trailing
    /// input is left untouched.
    ///
    /// # Errors
    ///
    /// On failure the cursor moves to the error offset (the input length for
    /// end-of-input) and no partially built tree is observable.
    pub fn decode(&mut self) -> Result<Value, DecodeError> {
        match self.decode_value() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.pos = err.offset();
                Err(err)
            }
        }
    }

    fn decode_value(&mut self) -> Result<Value, DecodeError> {
        let mut stack = DecodeStack::new();

        loop {
            self.pos = skip_space(self.buf, self.pos);
            let Some(&byte) = self.buf.get(self.pos) else {
                return Err(DecodeError::new(
                    ErrorKind::UnexpectedEndOfInput,
                    self.buf.len(),
                ));
            };

            match classify(byte) {
                TokenKind::ArrayBegin => {
                    if !stack.expects_value() {
                        return Err(self.invalid_char());
                    }
                    stack.push(
                        Frame::ArrayFirst(Array::with_capacity(ARRAY_INIT_CAPACITY)),
                        self.pos,
                    )?;
                    self.pos += 1;
                }

                TokenKind::ObjectBegin => {
                    if !stack.expects_value() {
                        return Err(self.invalid_char());
                    }
                    stack.push(Frame::Object(Map::new()), self.pos)?;
                    self.pos += 1;
                }

                TokenKind::ArrayEnd => match stack.pop() {
                    Some(Frame::ArrayFirst(arr) | Frame::Array(arr)) => {
                        self.pos += 1;
                        if let Some(root) = commit(&mut stack, Value::Array(arr)) {
                            return Ok(root);
                        }
                    }
                    _ => return Err(self.invalid_char()),
                },

                TokenKind::ObjectEnd => match stack.pop() {
                    // `}` closes an object only directly after `{` (empty
                    // map) or after a member; anything else, including the
                    // key-expected state reached by a comma, rejects it.
                    Some(Frame::Object(map)) if map.is_empty() => {
                        self.pos += 1;
                        if let Some(root) = commit(&mut stack, Value::Object(map)) {
                            return Ok(root);
                        }
                    }
                    Some(Frame::ObjectNext(map)) => {
                        self.pos += 1;
                        if let Some(root) = commit(&mut stack, Value::Object(map)) {
                            return Ok(root);
                        }
                    }
                    _ => return Err(self.invalid_char()),
                },

                TokenKind::ElemSep => match stack.pop() {
                    Some(Frame::Array(arr)) => {
                        self.pos += 1;
                        stack.restore(Frame::Array(arr));
                        // The element slot reuses the depth freed when the
                        // previous element completed.
                        stack.restore(Frame::Value);
                    }
                    Some(Frame::ObjectNext(map)) => {
                        self.pos += 1;
                        stack.restore(Frame::Object(map));
                    }
                    _ => return Err(self.invalid_char()),
                },

                TokenKind::KeySep => match stack.pop() {
                    Some(Frame::Key(key)) => {
                        // The frame below a pending key is always its
                        // object: it flips to expecting a separator while
                        // the member value is produced.
                        match stack.pop() {
                            Some(Frame::Object(map)) => {
                                stack.restore(Frame::ObjectNext(map));
                                stack.restore(Frame::Member(key));
                            }
                            _ => unreachable!(),
                        }
                        self.pos += 1;
                    }
                    _ => return Err(self.invalid_char()),
                },

                TokenKind::Scalar => {
                    if let Some(Frame::Object(_)) = stack.last() {
                        // Key position: only a string is acceptable.
                        if byte != b'"' {
                            return Err(self.invalid_char());
                        }
                        let key_offset = self.pos;
                        let (next, token) = scanner::scan(self.buf, self.pos)?;
                        let Scalar::Str { start, escape } = token else {
                            unreachable!()
                        };
                        let key = self.decode_string(start, next - 1, escape)?;
                        stack.push(Frame::Key(key), key_offset)?;
                        self.pos = next;
                    } else {
                        if !stack.expects_value() {
                            return Err(self.invalid_char());
                        }
                        let (next, token) = scanner::scan(self.buf, self.pos)?;
                        let value = self.scalar_value(token, next)?;
                        self.pos = next;
                        if let Some(root) = commit(&mut stack, value) {
                            return Ok(root);
                        }
                    }
                }
            }
        }
    }

    fn invalid_char(&self) -> DecodeError {
        DecodeError::new(ErrorKind::InvalidCharacter, self.pos)
    }

    /// Converts a scanned scalar into a value under the configured numeric
    /// mode. `end` is the cursor just past the token.
    fn scalar_value(&self, token: Scalar, end: usize) -> Result<Value, DecodeError> {
        Ok(match token {
            Scalar::Null => Value::Null,
            Scalar::True => Value::Boolean(true),
            Scalar::False => Value::Boolean(false),
            Scalar::Str { start, escape } => {
                Value::String(self.decode_string(start, end - 1, escape)?)
            }
            Scalar::Int { value, start } => {
                if self.options.use_number {
                    Value::Number(self.lexeme(start, end))
                } else if self.options.use_int64 {
                    Value::Integer(value)
                } else {
                    Value::Double(value as f64)
                }
            }
            Scalar::Float { value, start } => {
                if self.options.use_number {
                    Value::Number(self.lexeme(start, end))
                } else {
                    Value::Double(value)
                }
            }
        })
    }

    /// Materializes string content (`start..end`, quotes excluded) into an
    /// owned string: a single validation pass when no escape was seen, the
    /// full unquote otherwise.
    fn decode_string(
        &self,
        start: usize,
        end: usize,
        escape: Option<usize>,
    ) -> Result<String, DecodeError> {
        let content = &self.buf[start..end];
        let replace = !self.options.disable_unicode_replacement;
        match escape {
            None => unquote::raw(content, start, replace),
            Some(_) => unquote::unquote(content, start, replace),
        }
    }

    fn lexeme(&self, start: usize, end: usize) -> String {
        // Number lexemes are validated ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.buf[start..end]) }.to_string()
    }
}

/// Delivers a completed value to the frame below the one that produced it.
/// Returns the root value once the stack empties.
fn commit(stack: &mut DecodeStack, value: Value) -> Option<Value> {
    match stack.pop() {
        // First array element: the open-array frame flips to expecting a
        // separator.
        Some(Frame::ArrayFirst(mut arr)) => {
            arr.push(value);
            stack.restore(Frame::Array(arr));
            None
        }
        Some(Frame::Value) => match stack.last_mut() {
            None => Some(value),
            Some(Frame::Array(arr)) => {
                arr.push(value);
                None
            }
            _ => unreachable!(),
        },
        Some(Frame::Member(key)) => {
            match stack.last_mut() {
                // Duplicate keys resolve to the last occurrence.
                Some(Frame::ObjectNext(map)) => {
                    map.insert(key, value);
                }
                _ => unreachable!(),
            }
            None
        }
        _ => unreachable!(),
    }
}
