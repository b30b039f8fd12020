//! Base62 codec for short identifiers.
//!
//! Digits come first, then lowercase, then uppercase letters, so `10` encodes
//! to `a`, `36` to `A` and `62` to `10`.

/// Symbols in ascending digit order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric base of the encoding.
pub const BASE: u64 = 62;

/// Errors that can occur while decoding a Base62 string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid character in base62 string: {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("base62 value does not fit in 64 bits")]
    Overflow,
}

/// Encodes a non-negative integer as Base62.
///
/// # Examples
///
/// ```
/// use short_url::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // 62^11 > 2^64, so eleven symbols always suffice
    let mut buf = [0u8; 11];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[i..].iter().map(|&b| b as char).collect()
}

/// Decodes a Base62 string back to its integer value.
///
/// An empty string decodes to `0`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] for any byte outside [`ALPHABET`]
/// and [`DecodeError::Overflow`] when the value exceeds `u64::MAX`.
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    let mut value: u64 = 0;

    for (position, character) in s.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;

        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(value)
}

/// Left-pads `s` with `'0'` up to `len` characters.
///
/// Strings that are already long enough are returned unchanged.
pub fn pad_to_length(s: &str, len: usize) -> String {
    if s.len() >= len {
        return s.to_string();
    }
    format!("{s:0>len$}")
}

/// Returns `true` if every character of `s` belongs to [`ALPHABET`].
pub fn is_base62(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn digit_value(c: char) -> Option<u64> {
    let d = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_len() {
        assert_eq!(ALPHABET.len(), 62);
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(1), "1");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(3843), "ZZ");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("a").unwrap(), 10);
        assert_eq!(decode("Z").unwrap(), 61);
        assert_eq!(decode("10").unwrap(), 62);
        assert_eq!(decode("ZZ").unwrap(), 3843);
    }

    #[test]
    fn test_decode_empty_is_zero() {
        assert_eq!(decode("").unwrap(), 0);
    }

    #[test]
    fn test_decode_leading_zeros() {
        assert_eq!(decode("0000010").unwrap(), 62);
    }

    #[test]
    fn test_round_trip_boundaries() {
        let values = [
            0,
            1,
            61,
            62,
            1_000,
            1_000_000,
            i64::MAX as u64,
            u64::MAX - 1,
            u64::MAX,
        ];

        for n in values {
            assert_eq!(decode(&encode(n)).unwrap(), n, "round trip failed for {n}");
        }
    }

    #[test]
    fn test_round_trip_powers_of_62() {
        let mut n: u64 = 1;
        while let Some(next) = n.checked_mul(BASE) {
            assert_eq!(decode(&encode(n)).unwrap(), n);
            assert_eq!(decode(&encode(n - 1)).unwrap(), n - 1);
            n = next;
        }
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode("ab-c").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                character: '-',
                position: 2
            }
        );
        assert!(err.to_string().contains("invalid character"));
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        assert!(matches!(
            decode("abé"),
            Err(DecodeError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_decode_overflow() {
        // u64::MAX encodes to "lYGhA16ahyf"; one more symbol overflows
        let max = encode(u64::MAX);
        assert_eq!(max.len(), 11);
        assert_eq!(decode(&format!("{max}0")), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_pad_to_length() {
        assert_eq!(pad_to_length("abc", 7), "0000abc");
        assert_eq!(pad_to_length("", 3), "000");
        assert_eq!(pad_to_length("abcdefg", 7), "abcdefg");
        assert_eq!(pad_to_length("abcdefgh", 7), "abcdefgh");
    }

    #[test]
    fn test_is_base62() {
        assert!(is_base62("aZ09"));
        assert!(!is_base62("my-custom-url"));
        assert!(!is_base62("a_b"));
    }
}
