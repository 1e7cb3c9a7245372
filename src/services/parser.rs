use crate::models::ColorSet;
use crate::utils::parse_hex_color;

const DELIMITERS: [char; 4] = ['\n', '\r', ',', ';'];

/// Split `text` on newlines, commas and semicolons and keep every token that
/// parses as a hex color, in order. Tokens that don't parse are skipped.
#[must_use]
pub fn parse_color_set(text: &str) -> ColorSet {
    text.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .filter_map(|token| parse_hex_color(token).ok())
        .collect()
}
