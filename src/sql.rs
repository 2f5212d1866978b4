//! SQLite binding
//!
//! Registers the collation and scalar functions on a [`rusqlite::Connection`].
//! Every function here is a thin adapter: it sorts out the SQLite value type,
//! calls into the codec and turns codec errors into statement errors.
//!
//! ```rust
//! use rusqlite::Connection;
//! use u64text::sql::register_default;
//!
//! let conn = Connection::open_in_memory().unwrap();
//! register_default(&conn).unwrap();
//!
//! conn.execute_batch(
//!     "CREATE TABLE balances (amount TEXT COLLATE U64TEXT CHECK (is_u64text(amount)));
//!      INSERT INTO balances VALUES (u64_to_text('18446744073709551615')), (u64_to_text(7));",
//! )
//! .unwrap();
//!
//! let smallest: String = conn
//!     .query_row("SELECT u64text_display(amount) FROM balances ORDER BY amount LIMIT 1", [], |r| r.get(0))
//!     .unwrap();
//! assert_eq!(smallest, "7");
//! ```

use crate::collation::compare;
use crate::config::{ExtensionConfig, Scheme};
use crate::decoder::decode;
use crate::display::display;
use crate::encoder::{encode, encode_from_text};
use crate::error::{EncodeError, FunctionError};
use crate::raw::{parse_unchecked, raw_compare, reinterpret_as_i64, reinterpret_as_u64};
use crate::validator::is_canonical;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{ffi, Connection};
use std::cmp::Ordering;
use std::ffi::{c_int, c_void, CString};
use std::ptr;
use tracing::{debug, trace, warn};

pub const FN_U64_TO_TEXT: &str = "u64_to_text";
pub const FN_TEXT_TO_U64: &str = "text_to_u64";
pub const FN_IS_U64TEXT: &str = "is_u64text";
pub const FN_U64TEXT_DISPLAY: &str = "u64text_display";
pub const FN_RAW_U64: &str = "u64";
pub const FN_RAW_U64_CMP: &str = "u64_cmp";

/// Register the primitives selected by `config` on `conn`.
///
/// Calling this again on the same connection replaces each entry with an
/// identical one, so repeated registration is harmless.
///
/// # Errors
///
/// Returns the [`rusqlite::Error`] from the first registration SQLite refuses.
pub fn register(conn: &Connection, config: &ExtensionConfig) -> rusqlite::Result<()> {
    let scheme = config.scheme();
    if scheme == Scheme::Both {
        warn!(
            target: "u64text::sql",
            "registering both the canonical and the raw scheme; do not mix them in one column"
        );
    }

    if scheme.includes_canonical() {
        register_canonical(conn, config.collation_name())?;
    }
    if scheme.includes_raw() {
        register_raw(conn)?;
    }

    debug!(
        target: "u64text::sql",
        %scheme,
        collation = config.collation_name(),
        "u64text primitives registered"
    );
    Ok(())
}

/// [`register`] with the default configuration: canonical scheme, `U64TEXT`
///
/// # Errors
///
/// See [`register`].
pub fn register_default(conn: &Connection) -> rusqlite::Result<()> {
    register(conn, &ExtensionConfig::default())
}

fn register_canonical(conn: &Connection, collation_name: &str) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    register_collation(conn, collation_name)?;
    conn.create_scalar_function(FN_U64_TO_TEXT, 1, flags, u64_to_text)?;
    conn.create_scalar_function(FN_TEXT_TO_U64, 1, flags, text_to_u64)?;
    conn.create_scalar_function(FN_IS_U64TEXT, 1, flags, is_u64text)?;
    conn.create_scalar_function(FN_U64TEXT_DISPLAY, 1, flags, u64text_display)?;
    Ok(())
}

/// Install [`compare`] as a collation working on the stored bytes.
///
/// `Connection::create_collation` hands the callback lossily decoded `&str`
/// values, which changes the byte length of non-UTF-8 input and with it the
/// length fallback. Going through the C API keeps the raw bytes.
fn register_collation(conn: &Connection, collation_name: &str) -> rusqlite::Result<()> {
    let name = CString::new(collation_name)?;
    // Safety: the handle is valid for the lifetime of `conn`, the callback
    // holds no user data and needs no destructor
    let rc = unsafe {
        ffi::sqlite3_create_collation_v2(
            conn.handle(),
            name.as_ptr(),
            ffi::SQLITE_UTF8,
            ptr::null_mut(),
            Some(collation_callback),
            None,
        )
    };
    if rc != ffi::SQLITE_OK {
        return Err(rusqlite::Error::SqliteFailure(ffi::Error::new(rc), None));
    }
    Ok(())
}

unsafe extern "C" fn collation_callback(
    _arg: *mut c_void,
    len1: c_int,
    ptr1: *const c_void,
    len2: c_int,
    ptr2: *const c_void,
) -> c_int {
    // Safety: SQLite passes pointers valid for the given lengths
    let a = unsafe { collation_arg(ptr1, len1) };
    let b = unsafe { collation_arg(ptr2, len2) };
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

unsafe fn collation_arg<'a>(ptr: *const c_void, len: c_int) -> &'a [u8] {
    match usize::try_from(len) {
        Ok(len) if len > 0 && !ptr.is_null() => unsafe {
            std::slice::from_raw_parts(ptr.cast::<u8>(), len)
        },
        _ => &[],
    }
}

fn register_raw(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function(FN_RAW_U64, 1, flags, raw_u64)?;
    conn.create_scalar_function(FN_RAW_U64_CMP, 2, flags, raw_u64_cmp)?;
    Ok(())
}

/// Constraint predicate: true only for text values that are canonical.
///
/// Any other type, NULL included, is `false` rather than an error.
#[must_use]
pub fn is_canonical_value(value: ValueRef<'_>) -> bool {
    match value {
        ValueRef::Text(bytes) => is_canonical(bytes),
        _ => false,
    }
}

const fn type_name(value: &ValueRef<'_>) -> &'static str {
    match value {
        ValueRef::Null => "NULL",
        ValueRef::Integer(_) => "INTEGER",
        ValueRef::Real(_) => "REAL",
        ValueRef::Text(_) => "TEXT",
        ValueRef::Blob(_) => "BLOB",
    }
}

fn reject(function: &'static str, err: impl Into<FunctionError>) -> rusqlite::Error {
    let err = err.into();
    trace!(target: "u64text::sql", function, error = %err, "argument rejected");
    rusqlite::Error::UserFunctionError(Box::new(err))
}

fn unsupported(function: &'static str, value: &ValueRef<'_>) -> rusqlite::Error {
    let found = match value {
        ValueRef::Real(_) => "REAL; values larger than double need to be passed as a string",
        other => type_name(other),
    };
    reject(function, FunctionError::UnsupportedType { function, found })
}

/// `u64_to_text(x)`: INTEGER is read as a u64 bit pattern, TEXT is parsed
/// with overflow detection
fn u64_to_text(ctx: &Context<'_>) -> rusqlite::Result<Value> {
    let arg = ctx.get_raw(0);
    let text = match arg {
        ValueRef::Null => return Ok(Value::Null),
        ValueRef::Integer(i) => encode(reinterpret_as_u64(i)),
        ValueRef::Text(bytes) => {
            let input = std::str::from_utf8(bytes).map_err(|_| {
                reject(
                    FN_U64_TO_TEXT,
                    EncodeError::InvalidNumberFormat("input is not valid UTF-8".to_string()),
                )
            })?;
            encode_from_text(input).map_err(|e| reject(FN_U64_TO_TEXT, e))?
        }
        ValueRef::Real(_) | ValueRef::Blob(_) => return Err(unsupported(FN_U64_TO_TEXT, &arg)),
    };
    Ok(Value::Text(text.as_str().to_owned()))
}

/// `text_to_u64(x)`: the u64 comes back as the signed integer with the same
/// bits, since that is all SQLite can hold. Integers pass through.
fn text_to_u64(ctx: &Context<'_>) -> rusqlite::Result<Value> {
    let arg = ctx.get_raw(0);
    match arg {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(i) => Ok(Value::Integer(i)),
        ValueRef::Text(bytes) => {
            let value = decode(bytes).map_err(|e| reject(FN_TEXT_TO_U64, e))?;
            Ok(Value::Integer(reinterpret_as_i64(value)))
        }
        ValueRef::Real(_) | ValueRef::Blob(_) => Err(unsupported(FN_TEXT_TO_U64, &arg)),
    }
}

#[allow(clippy::unnecessary_wraps)]
fn is_u64text(ctx: &Context<'_>) -> rusqlite::Result<bool> {
    Ok(is_canonical_value(ctx.get_raw(0)))
}

/// `u64text_display(x)`: never fails; anything not canonical is returned as is
#[allow(clippy::unnecessary_wraps)]
fn u64text_display(ctx: &Context<'_>) -> rusqlite::Result<Value> {
    let arg = ctx.get_raw(0);
    if let ValueRef::Text(bytes) = arg {
        if is_canonical(bytes) {
            // Canonical text is ASCII, the conversion cannot fail
            if let Ok(text) = std::str::from_utf8(bytes) {
                return Ok(Value::Text(display(text).to_owned()));
            }
        }
    }
    Ok(match arg {
        // Lossy so that stray non-UTF-8 bytes in legacy rows cannot fail the call
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        other => Value::from(other),
    })
}

/// `u64(x)`: raw scheme, lenient text parse or integer bits, no validation
fn raw_u64(ctx: &Context<'_>) -> rusqlite::Result<Value> {
    let arg = ctx.get_raw(0);
    match arg {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(i) => Ok(Value::Integer(reinterpret_as_i64(reinterpret_as_u64(i)))),
        ValueRef::Text(bytes) => Ok(Value::Integer(reinterpret_as_i64(parse_unchecked(bytes)))),
        ValueRef::Real(_) | ValueRef::Blob(_) => Err(unsupported(FN_RAW_U64, &arg)),
    }
}

/// `u64_cmp(a, b)`: raw scheme three-way comparison of two texts
fn raw_u64_cmp(ctx: &Context<'_>) -> rusqlite::Result<Value> {
    let (a, b) = (ctx.get_raw(0), ctx.get_raw(1));
    match (a, b) {
        (ValueRef::Null, _) | (_, ValueRef::Null) => Ok(Value::Null),
        (ValueRef::Text(a), ValueRef::Text(b)) => Ok(Value::Integer(i64::from(raw_compare(a, b)))),
        (ValueRef::Text(_), other) | (other, _) => Err(unsupported(FN_RAW_U64_CMP, &other)),
    }
}
