use crate::models::{Color32, HexColorError};

/// Parse a permissive hex color token such as `#FF8800`, `0xFF8800` or
/// `ff880080`.
///
/// Every `0x` and `#` in the token is dropped (not only a leading one), then
/// surrounding whitespace is trimmed. The first six characters are read as
/// red, green and blue. Alpha is only read when exactly eight characters
/// remain; any other length keeps alpha at 255. Length is counted in
/// `char`s, so `112233😀` is seven characters and parses as RGB only.
///
/// # Errors
/// Returns `HexColorError` when fewer than six characters remain or a byte
/// pair is not two hex digits. Callers that need a value anyway can fall back
/// to `Color32::SENTINEL`.
pub fn parse_hex_color(token: &str) -> Result<Color32, HexColorError> {
    let cleaned = token.replace("0x", "").replace('#', "");
    let hex = cleaned.trim();

    let len = hex.chars().count();
    if len < 6 {
        return Err(HexColorError::TooShort(len));
    }

    let red = hex_byte(hex, 0)?;
    let green = hex_byte(hex, 2)?;
    let blue = hex_byte(hex, 4)?;
    let alpha = if len == 8 { hex_byte(hex, 6)? } else { 255 };

    Ok(Color32::rgba(red, green, blue, alpha))
}

fn hex_byte(hex: &str, start: usize) -> Result<u8, HexColorError> {
    let pair = hex
        .get(start..start + 2)
        .ok_or_else(|| HexColorError::InvalidDigits(hex.chars().skip(start).take(2).collect()))?;

    // from_str_radix would accept a leading '+'
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::InvalidDigits(pair.to_string()));
    }

    u8::from_str_radix(pair, 16).map_err(|_| HexColorError::InvalidDigits(pair.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;
    use crate::models::{Color32, HexColorError};

    #[test]
    fn six_digits_are_opaque() {
        for token in ["FF8000", "#FF8000", "0xFF8000", "  #ff8000\t", " 0xff8000 "] {
            assert_eq!(
                parse_hex_color(token),
                Ok(Color32::rgba(255, 128, 0, 255)),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn eight_digits_carry_alpha() {
        assert_eq!(parse_hex_color("FF00FF80"), Ok(Color32::rgba(255, 0, 255, 128)));
        assert_eq!(parse_hex_color("#00000000"), Ok(Color32::rgba(0, 0, 0, 0)));
        assert_eq!(parse_hex_color("0x11223344"), Ok(Color32::rgba(17, 34, 51, 68)));
    }

    #[test]
    fn seven_or_nine_digits_ignore_alpha() {
        assert_eq!(parse_hex_color("1122334"), Ok(Color32::rgb(17, 34, 51)));
        assert_eq!(parse_hex_color("112233445"), Ok(Color32::rgb(17, 34, 51)));
        // trailing garbage past the rgb digits is never looked at
        assert_eq!(parse_hex_color("112233zzz"), Ok(Color32::rgb(17, 34, 51)));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 7 chars (10 bytes), so alpha is never read
        assert_eq!(parse_hex_color("112233😀"), Ok(Color32::rgb(17, 34, 51)));
    }

    #[test]
    fn bad_alpha_fails_the_whole_token() {
        assert!(matches!(
            parse_hex_color("112233zz"),
            Err(HexColorError::InvalidDigits(_))
        ));
    }

    #[test]
    fn prefixes_are_stripped_anywhere() {
        assert_eq!(parse_hex_color("0x0xFF0000"), Ok(Color32::rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("FF#00#00"), Ok(Color32::rgb(255, 0, 0)));
        // "0x" inside the digits is removed too, shortening the token
        assert_eq!(parse_hex_color("AA0xBBCC"), Ok(Color32::rgb(170, 187, 204)));
        // uppercase X is not a prefix
        assert!(parse_hex_color("0XFF0000").is_err());
    }

    #[test]
    fn short_tokens_fail() {
        assert_eq!(parse_hex_color(""), Err(HexColorError::TooShort(0)));
        assert_eq!(parse_hex_color("#FFF"), Err(HexColorError::TooShort(3)));
        assert_eq!(parse_hex_color("  FFFFF  "), Err(HexColorError::TooShort(5)));
    }

    #[test]
    fn non_hex_digits_fail() {
        for token in ["GG0000", "garbage", "FF 000", "+F0000", "FF-F00", "éé0000"] {
            assert!(parse_hex_color(token).is_err(), "token {token:?}");
        }
    }

    #[test]
    fn failure_falls_back_to_sentinel() {
        let color = parse_hex_color("xyz").unwrap_or(Color32::SENTINEL);
        assert_eq!(color, Color32::rgba(0, 0, 0, 255));
    }
}
