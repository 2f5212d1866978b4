//! # u64text
//!
//! Lossless, order-preserving storage of full-range `u64` values in a host
//! that only knows signed 64-bit integers and doubles.
//!
//! SQLite stores integers above `i64::MAX` as REAL, which rounds them and
//! breaks their sort order. This crate stores them as **canonical text**
//! instead: exactly 20 ASCII digits, zero-padded on the left.
//!
//! - **Lossless**: every `u64` has exactly one canonical text and back
//! - **Order preservation**: byte comparison of canonical texts matches numeric comparison
//! - **Fixed width**: 20 bytes, built on the stack
//! - **Checked parsing**: overflow is an error, never a wrap or a clamp
//!
//! ## Examples
//!
//! ```rust
//! use u64text::{compare, decode, display, encode, U64Text};
//! use std::cmp::Ordering;
//!
//! let a = encode(9_223_372_036_854_775_807);
//! let b = encode(9_223_372_036_854_775_808);
//! assert_eq!(a.as_str(), "09223372036854775807");
//! assert_eq!(compare(a.as_bytes(), b.as_bytes()), Ordering::Less);
//!
//! assert_eq!(decode("18446744073709551615").unwrap(), u64::MAX);
//! assert!(decode("99999999999999999999").is_err());
//!
//! assert_eq!(display("00000000000000000042"), "42");
//!
//! // Free text goes through the same checked parser
//! let parsed: U64Text = "018".parse().unwrap();
//! assert_eq!(parsed.value(), 18);
//! ```
//!
//! ## Host binding
//!
//! [`sql::register`] installs the `U64TEXT` collation and the
//! `u64_to_text` / `text_to_u64` / `is_u64text` / `u64text_display`
//! functions on a [`rusqlite::Connection`]. The [`raw`] module holds the older
//! bit-reinterpretation scheme (`u64`, `u64_cmp`), which performs no
//! validation and is only registered on request.

pub(crate) mod collation;
pub(crate) mod config;
pub(crate) mod decoder;
pub(crate) mod digits;
pub(crate) mod display;
pub(crate) mod encoder;
pub(crate) mod error;
pub mod raw;
pub mod sql;
pub(crate) mod text;
pub(crate) mod validator;

// Re-export main types and functions
pub use collation::compare;
pub use config::{ExtensionConfig, Scheme, DEFAULT_COLLATION_NAME};
pub use decoder::decode;
pub use digits::WIDTH;
pub use display::{display, display_opt};
pub use encoder::{encode, encode_from_text};
pub use error::{ConfigError, DecodeError, DecodeResult, EncodeError, EncodeResult, FunctionError};
pub use text::U64Text;
pub use validator::is_canonical;
