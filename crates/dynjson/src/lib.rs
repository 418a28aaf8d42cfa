//! A stack-driven JSON decoder that materializes arbitrary input into a
//! dynamically typed [`Value`] tree.
//!
//! The decoder runs a single loop over a complete byte buffer: a bitmap
//! whitespace skip and byte-indexed token dispatch feed a scalar scanner and
//! an explicit bounded frame stack, so arbitrarily nested documents never
//! recurse on the call stack. Failures carry the byte offset of the
//! offending input.
//!
//! ```
//! use dynjson::{from_str, DecodeOptions, Value};
//!
//! let value = from_str(r#"{"ok":true,"ids":[1,2]}"#, DecodeOptions::default()).unwrap();
//! assert!(value.as_object().unwrap()["ok"].as_bool().unwrap());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod dispatch;
mod error;
mod options;
mod scanner;
mod stack;
mod unquote;
mod value;

pub use decoder::{from_slice, from_str, Decoder};
pub use error::{DecodeError, ErrorKind};
pub use options::DecodeOptions;
pub use stack::MAX_RECURSE;
pub use value::{Array, Map, Value};

#[cfg(test)]
mod tests;
