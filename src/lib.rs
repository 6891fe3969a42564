//! Caesar substitution cipher over the 26-letter Latin case-pair alphabet.
//!
//! Each Latin letter in the message is rotated by a signed shift within its
//! own case-alphabet, wrapping circularly; every other character (digits,
//! punctuation, whitespace, non-Latin letters, symbols) passes through
//! unchanged. The shift is taken modulo 26 with Euclidean semantics, so
//! negative shifts and shifts larger than 26 behave as their single-wheel
//! equivalents. This is an educational substitution cipher, not a security
//! primitive.
//!
//! # Architecture
//!
//! ```text
//! cipher    (core — single-pass rotation, isolated Euclidean wrap helper)
//!     ↑ delegated to by
//! request   (boundary — runtime-typed Value arguments, total upfront validation)
//! error     (CaesarShiftError — one distinct variant per contract violation)
//! ```
//!
//! # Examples
//!
//! Statically typed core, where mistyped arguments cannot exist:
//!
//! ```
//! let enciphered = caesarshift::encipher("Hello, World!", 3);
//! assert_eq!(enciphered, "Khoor, Zruog!");
//!
//! let deciphered = caesarshift::decipher(&enciphered, 3);
//! assert_eq!(deciphered, "Hello, World!");
//! ```
//!
//! Loosely typed boundary, for arguments bound from dynamic sources:
//!
//! ```
//! use caesarshift::{transform, CaesarShiftError, Value};
//!
//! let out = transform(&Value::from("Z"), Some(&Value::from(1)));
//! assert_eq!(out.unwrap(), "A");
//!
//! let out = transform(&Value::from("Z"), None);
//! assert_eq!(out.unwrap_err(), CaesarShiftError::MissingShift);
//! ```

#![deny(clippy::all)]

pub mod error;

mod cipher;
mod request;

pub use cipher::{decipher, encipher};
pub use error::CaesarShiftError;
pub use request::{transform, Value};
