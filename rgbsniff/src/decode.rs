//! Standard-alphabet base64 decoding

use crate::error::DecodeError;

const PAD: u8 = b'=';

/// Map a base64 character to its 6-bit value. Padding counts as zero.
#[inline]
fn sextet(b: u8) -> Option<u32> {
    let val = match b {
        b'A'..=b'Z' => b - b'A',
        b'a'..=b'z' => b - b'a' + 26,
        b'0'..=b'9' => b - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        PAD => 0,
        _ => return None,
    };
    Some(val as u32)
}

/// Decode base64 text into bytes.
///
/// Line breaks (`\n`, `\r`) are removed first; any other whitespace is
/// rejected as an invalid character. The padding-adjusted output length only
/// looks at the last two characters of the cleaned input.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let clean: Vec<u8> = input
        .bytes()
        .filter(|&b| b != b'\n' && b != b'\r')
        .collect();

    if clean.is_empty() || clean.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength { len: clean.len() });
    }

    let padding = clean.iter().rev().take(2).filter(|&&b| b == PAD).count();
    let out_len = clean.len() / 4 * 3 - padding;

    let mut out = Vec::with_capacity(out_len);
    for (group_idx, group) in clean.chunks_exact(4).enumerate() {
        let mut triple = 0u32;
        for (i, &b) in group.iter().enumerate() {
            let val = sextet(b).ok_or_else(|| invalid_character(input, group_idx * 4 + i))?;
            triple = (triple << 6) | val;
        }

        for byte in [(triple >> 16) as u8, (triple >> 8) as u8, triple as u8] {
            if out.len() < out_len {
                out.push(byte);
            }
        }
    }

    log::trace!("Decoded {} base64 characters into {} bytes", clean.len(), out.len());
    Ok(out)
}

/// Build the error for the `clean_pos`-th non-newline character, reported
/// with its character position in the original input.
fn invalid_character(input: &str, clean_pos: usize) -> DecodeError {
    let (position, character) = input
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != '\n' && c != '\r')
        .find(|&(_, c)| !c.is_ascii() || sextet(c as u8).is_none())
        .unwrap_or((clean_pos, char::REPLACEMENT_CHARACTER));

    DecodeError::InvalidCharacter {
        character,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_vectors() {
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
        assert_eq!(decode("Zm9vYg==").unwrap(), b"foob");
        assert_eq!(decode("Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(decode("Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn strips_line_breaks_only() {
        assert_eq!(decode("Zm9v\r\nYmFy\n").unwrap(), b"foobar");
        assert_eq!(
            decode("Zm9v YmFy"),
            Err(DecodeError::InvalidLength { len: 9 })
        );
        assert_eq!(
            decode("Zm9 YmFy"),
            Err(DecodeError::InvalidCharacter {
                character: ' ',
                position: 3
            })
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(decode(""), Err(DecodeError::InvalidLength { len: 0 }));
        assert_eq!(decode("\n\r\n"), Err(DecodeError::InvalidLength { len: 0 }));
        assert_eq!(decode("Zm9vY"), Err(DecodeError::InvalidLength { len: 5 }));
    }

    #[test]
    fn reports_position_in_original_input() {
        assert_eq!(
            decode("Zm9v\nYm*y"),
            Err(DecodeError::InvalidCharacter {
                character: '*',
                position: 7
            })
        );
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert!(matches!(
            decode("é=="),
            Err(DecodeError::InvalidCharacter { character: 'é', position: 0 })
        ));
    }

    #[test]
    fn inner_padding_decodes_as_zero() {
        // '=' before the last two characters does not shorten the output
        assert_eq!(decode("/w==////").unwrap(), [255, 0, 0, 255, 255, 255]);
        assert_eq!(decode("AA==AAAA").unwrap().len(), 6);
        // one '=' among the last two drops one byte even when not trailing
        assert_eq!(decode("//=/").unwrap(), [255, 240]);
        assert_eq!(decode("AA=A").unwrap(), [0, 0]);
    }

    #[test]
    fn rgb_pixels() {
        // two pixels: pure red, pure blue
        assert_eq!(decode("/wAAAAD/").unwrap(), [255, 0, 0, 0, 0, 255]);
    }
}
