use thiserror::Error;

/// Errors that can occur while decoding canonical u64 text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid u64 text format: {0}")]
    InvalidFormat(String),

    #[error("Numeric overflow: value exceeds 18446744073709551615")]
    NumericOverflow,
}

/// Errors that can occur while encoding free decimal text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid u64 string: {0}")]
    InvalidNumberFormat(String),

    #[error("Numeric overflow: value exceeds 18446744073709551615")]
    NumericOverflow,
}

/// Errors raised by the SQL functions at the host boundary
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Unsupported type for {function}: {found}")]
    UnsupportedType {
        function: &'static str,
        found: &'static str,
    },
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors in extension configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown scheme {0:?}: expected canonical, raw or both")]
    UnknownScheme(String),

    #[error("Collation name must not be empty")]
    EmptyCollationName,
}
