//! Core rotation logic for the Caesar cipher.
//!
//! Rotates Latin letters through their own 26-letter case-alphabet and
//! copies every other character verbatim. The transform is a single pass
//! over the input in original order; the output never aliases the input
//! and always has the same length.

/// Number of letters in each case-alphabet.
const ALPHABET_LEN: i64 = 26;

/// Normalizes an arbitrary signed offset into `[0, 26)`.
///
/// Uses a floored/Euclidean modulo so that negative offsets wrap correctly:
/// `wrap_offset(-1) == 25`, not `-1`. Offsets of any magnitude collapse to
/// their equivalent single-alphabet rotation (`wrap_offset(100) == 22`).
///
/// # Parameters
/// - `offset`: Signed rotation amount, unbounded.
///
/// # Returns
/// The equivalent rotation step in `0..26`.
fn wrap_offset(offset: i64) -> u8 {
    offset.rem_euclid(ALPHABET_LEN) as u8
}

/// Rotates one ASCII letter by `step` positions within its alphabet.
///
/// `base` is `b'A'` for uppercase letters and `b'a'` for lowercase ones;
/// `step` must already be normalized into `0..26`.
fn shift_letter(c: char, base: u8, step: u8) -> char {
    let rotated = base + (c as u8 - base + step) % ALPHABET_LEN as u8;
    rotated as char
}

/// Enciphers `text` by rotating each Latin letter `shift` positions forward.
///
/// Uppercase letters rotate within `A..=Z`, lowercase letters within
/// `a..=z`, and all other characters (digits, punctuation, whitespace,
/// non-Latin letters, symbols) pass through unchanged. The shift is taken
/// modulo 26 with Euclidean semantics, so negative shifts and shifts larger
/// than 26 wrap circularly.
///
/// # Parameters
/// - `text`: The message to encipher.
/// - `shift`: Signed rotation amount; any `i64` value is valid.
///
/// # Returns
/// A newly allocated `String` of the same length as `text`.
///
/// # Examples
///
/// ```
/// assert_eq!(caesarshift::encipher("Hello, World!", 3), "Khoor, Zruog!");
/// assert_eq!(caesarshift::encipher("a", -1), "z");
/// ```
pub fn encipher(text: &str, shift: i64) -> String {
    // Normalize once so the per-character arithmetic stays in u8 range
    // for every possible i64 shift.
    let step = wrap_offset(shift);
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        let shifted = if c.is_ascii_uppercase() {
            shift_letter(c, b'A', step)
        } else if c.is_ascii_lowercase() {
            shift_letter(c, b'a', step)
        } else {
            c
        };
        output.push(shifted);
    }
    output
}

/// Deciphers `text` by rotating each Latin letter `shift` positions backward.
///
/// Exact inverse of [`encipher`]: `decipher(&encipher(t, s), s) == t` for
/// every message and every `i64` shift, including `i64::MIN` (which cannot
/// simply be negated).
///
/// # Parameters
/// - `text`: The enciphered message.
/// - `shift`: The shift that was used to encipher; any `i64` value is valid.
///
/// # Returns
/// A newly allocated `String` of the same length as `text`.
///
/// # Examples
///
/// ```
/// assert_eq!(caesarshift::decipher("Khoor, Zruog!", 3), "Hello, World!");
/// ```
pub fn decipher(text: &str, shift: i64) -> String {
    let inverse = (ALPHABET_LEN - i64::from(wrap_offset(shift))) % ALPHABET_LEN;
    encipher(text, inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_offset_zero() {
        assert_eq!(wrap_offset(0), 0);
        assert_eq!(wrap_offset(26), 0);
        assert_eq!(wrap_offset(-26), 0);
    }

    #[test]
    fn test_wrap_offset_negative() {
        assert_eq!(wrap_offset(-1), 25);
        assert_eq!(wrap_offset(-27), 25);
        assert_eq!(wrap_offset(-100), 4);
    }

    #[test]
    fn test_wrap_offset_large() {
        assert_eq!(wrap_offset(100), 22);
        assert_eq!(wrap_offset(27), 1);
    }

    #[test]
    fn test_wrap_offset_extremes() {
        assert_eq!(wrap_offset(i64::MAX), (i64::MAX % 26) as u8);
        // i64::MIN % 26 == -8 truncated; Euclidean result must be 18.
        assert_eq!(wrap_offset(i64::MIN), 18);
    }

    #[test]
    fn test_encipher_basic() {
        assert_eq!(encipher("abc", 1), "bcd");
        assert_eq!(encipher("ABC", 1), "BCD");
    }

    #[test]
    fn test_encipher_wraps_at_alphabet_end() {
        assert_eq!(encipher("Z", 1), "A");
        assert_eq!(encipher("z", 1), "a");
    }

    #[test]
    fn test_encipher_negative_shift() {
        assert_eq!(encipher("a", -1), "z");
        assert_eq!(encipher("A", -1), "Z");
    }

    #[test]
    fn test_encipher_large_shift_collapses() {
        assert_eq!(encipher("a", 100), "w");
        assert_eq!(encipher("abc", 100), encipher("abc", 22));
    }

    #[test]
    fn test_encipher_passthrough() {
        assert_eq!(encipher("XYZ123", 2), "ZAB123");
        assert_eq!(encipher("  .,!?", 13), "  .,!?");
    }

    #[test]
    fn test_encipher_non_latin_untouched() {
        assert_eq!(encipher("über ñandú 日本", 5), "über ñandú 日本");
    }

    #[test]
    fn test_decipher_inverts_encipher() {
        let text = "Attack at dawn!";
        for shift in [-53, -26, -1, 0, 1, 3, 25, 26, 27, 100] {
            assert_eq!(decipher(&encipher(text, shift), shift), text);
        }
    }

    #[test]
    fn test_decipher_extreme_shifts() {
        let text = "Edge case";
        assert_eq!(decipher(&encipher(text, i64::MIN), i64::MIN), text);
        assert_eq!(decipher(&encipher(text, i64::MAX), i64::MAX), text);
    }
}
