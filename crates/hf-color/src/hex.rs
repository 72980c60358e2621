// SPDX-License-Identifier: MIT
//
// Hex codec. Input is forgiving (optional `#`, any case, 3- or 6-digit
// form, surrounding whitespace); output is always `#RRGGBB` uppercase.

use crate::error::{ColorError, Result};

/// Parse a hex color string into an 8-bit RGB triple.
///
/// Accepts `RGB` and `RRGGBB`, with or without a leading `#`. The short
/// form is expanded by doubling each digit (`#F0A` → `#FF00AA`).
///
/// # Errors
///
/// Returns [`ColorError::InvalidLength`] when the digit count is not 3 or 6
/// and [`ColorError::InvalidDigit`] on the first non-hex character.
pub fn parse_hex(input: &str) -> Result<(u8, u8, u8)> {
    let s = input.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            input: input.to_owned(),
            digit: bad,
        });
    }

    let bytes = s.as_bytes();
    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0]);
            let g = parse_hex_digit(bytes[1]);
            let b = parse_hex_digit(bytes[2]);
            Ok((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => Ok((
            parse_hex_byte(&bytes[0..2]),
            parse_hex_byte(&bytes[2..4]),
            parse_hex_byte(&bytes[4..6]),
        )),
        len => Err(ColorError::InvalidLength {
            input: input.to_owned(),
            len,
        }),
    }
}

/// Format an RGB triple as `#RRGGBB` (uppercase, zero-padded).
#[must_use]
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

// Callers have already checked `is_ascii_hexdigit`.
#[inline]
const fn parse_hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn parse_hex_byte(bytes: &[u8]) -> u8 {
    parse_hex_digit(bytes[0]) << 4 | parse_hex_digit(bytes[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn six_digits_with_hash() {
        assert_eq!(parse_hex("#E63946"), Ok((0xE6, 0x39, 0x46)));
    }

    #[test]
    fn six_digits_without_hash() {
        assert_eq!(parse_hex("a8dadc"), Ok((0xA8, 0xDA, 0xDC)));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(parse_hex("#aBcDeF"), parse_hex("#ABCDEF"));
    }

    #[test]
    fn short_form_doubles_digits() {
        assert_eq!(parse_hex("#F0A"), Ok((0xFF, 0x00, 0xAA)));
        assert_eq!(parse_hex("123"), Ok((0x11, 0x22, 0x33)));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_hex("  #000000\n"), Ok((0, 0, 0)));
    }

    #[test]
    fn wrong_length_rejected() {
        assert_eq!(
            parse_hex("#12345"),
            Err(ColorError::InvalidLength {
                input: "#12345".into(),
                len: 5
            })
        );
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#").is_err());
        assert!(parse_hex("#FFFFFFFF").is_err());
    }

    #[test]
    fn bad_digit_rejected() {
        assert_eq!(
            parse_hex("#GG0000"),
            Err(ColorError::InvalidDigit {
                input: "#GG0000".into(),
                digit: 'G'
            })
        );
    }

    #[test]
    fn format_is_uppercase_and_padded() {
        assert_eq!(format_hex(0, 10, 255), "#000AFF");
    }
}
