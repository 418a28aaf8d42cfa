/// Configuration options for a decode call.
///
/// # Examples
///
/// ```
/// use dynjson::{from_str, DecodeOptions, Value};
///
/// let options = DecodeOptions {
///     use_int64: true,
///     ..Default::default()
/// };
/// assert_eq!(from_str("7", options).unwrap(), Value::Integer(7));
/// ```
///
/// # Default
///
/// All options default to `false`: numbers decode to
/// [`Value::Double`](crate::Value::Double) and ill-formed unicode is
/// replaced by U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Whether to preserve every numeric literal as its source lexeme.
    ///
    /// When `true`, numbers decode to [`Value::Number`](crate::Value::Number)
    /// carrying the exact bytes of the literal, so values such as `1e400` or
    /// 30-digit integers survive re-encoding unchanged. Takes precedence
    /// over `use_int64`.
    ///
    /// # Default
    ///
    /// `false`
    pub use_number: bool,

    /// Whether to decode integer literals as 64-bit signed integers.
    ///
    /// When `true`, literals without a fraction or exponent decode to
    /// [`Value::Integer`](crate::Value::Integer); literals that overflow
    /// `i64` fall back to [`Value::Double`](crate::Value::Double). Ignored
    /// when `use_number` is set.
    ///
    /// # Default
    ///
    /// `false`
    pub use_int64: bool,

    /// Whether ill-formed unicode in strings is an error.
    ///
    /// By default, unpaired or truncated surrogate escapes and invalid UTF-8
    /// byte sequences in string content are replaced by U+FFFD. When `true`,
    /// they fail the decode with the offset of the offending escape or byte.
    ///
    /// # Default
    ///
    /// `false`
    pub disable_unicode_replacement: bool,
}
