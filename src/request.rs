//! Loosely typed transformation boundary.
//!
//! The statically typed core ([`encipher`](crate::encipher)) makes type
//! errors unrepresentable, but callers binding arguments from dynamic
//! sources (script hosts, config values, argv) only learn the argument
//! types at run time. [`transform`] is that boundary: it validates a
//! [`Value`]-typed request in full before any rotation work begins and
//! reports each contract violation as a distinct error.

use crate::cipher;
use crate::error::CaesarShiftError;

/// An argument value whose type is only known at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A textual value.
    Text(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Real(f64),
    /// A boolean value.
    Bool(bool),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Enciphers a runtime-typed transformation request.
///
/// Validation is total and upfront, in this order:
/// 1. An absent `shift` is rejected before anything else.
/// 2. `text` must be [`Value::Text`]; it is never coerced.
/// 3. `shift` must be [`Value::Int`]; it is never coerced.
///
/// Only after all three checks pass is the message rotated, so there are
/// no partial results: either the whole input is transformed or an error
/// is returned before any transformation occurs.
///
/// # Parameters
/// - `text`: The message, expected to be a textual value.
/// - `shift`: The rotation amount, expected to be an integer value.
///
/// # Returns
/// The enciphered message, of the same length as the input text.
///
/// # Errors
/// - [`CaesarShiftError::MissingShift`] if `shift` is `None`.
/// - [`CaesarShiftError::InvalidTextType`] if `text` is not textual.
/// - [`CaesarShiftError::InvalidShiftType`] if `shift` is not an integer.
///
/// # Examples
///
/// ```
/// use caesarshift::{transform, Value};
///
/// let out = transform(&Value::from("Hello, World!"), Some(&Value::from(3)));
/// assert_eq!(out.unwrap(), "Khoor, Zruog!");
/// ```
pub fn transform(text: &Value, shift: Option<&Value>) -> Result<String, CaesarShiftError> {
    let shift = shift.ok_or(CaesarShiftError::MissingShift)?;
    let Value::Text(text) = text else {
        return Err(CaesarShiftError::InvalidTextType);
    };
    let Value::Int(shift) = shift else {
        return Err(CaesarShiftError::InvalidShiftType);
    };
    Ok(cipher::encipher(text, *shift))
}
