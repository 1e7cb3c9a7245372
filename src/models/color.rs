use std::fmt;
use std::str::FromStr;

use crate::models::HexColorError;
use crate::utils::parse_hex_color;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    /// Opaque black, handed out alongside a failed parse.
    pub const SENTINEL: Self = Self::rgba(0, 0, 0, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl From<(u8, u8, u8, u8)> for Color32 {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl fmt::Display for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color32 {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// Ordered, immutable list of colors loaded from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
    colors: Vec<Color32>,
}

impl ColorSet {
    #[must_use]
    pub fn new(colors: Vec<Color32>) -> Self {
        Self { colors }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color32> {
        self.colors.get(index).copied()
    }

    /// Color for the `index`-th line, wrapping around the palette.
    #[must_use]
    pub fn pick(&self, index: usize) -> Option<Color32> {
        if self.colors.is_empty() {
            return None;
        }
        self.get(index % self.colors.len())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color32> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = &'a Color32;
    type IntoIter = std::slice::Iter<'a, Color32>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl FromIterator<Color32> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
