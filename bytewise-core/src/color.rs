//! RGB colors and their hexadecimal notation

use crate::error::LessonError;
use std::fmt;
use std::str::FromStr;

/// 24-bit color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#RRGGBB`, uppercase
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Channels packed as `0xRRGGBB`
    pub const fn packed(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Split `0xRRGGBB` back into channels; bits above 24 are ignored
    pub const fn from_packed(color: u32) -> Self {
        Self {
            red: ((color >> 16) & 0xFF) as u8,
            green: ((color >> 8) & 0xFF) as u8,
            blue: (color & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LessonError::InvalidColor(s.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| LessonError::InvalidColor(s.to_string()))?;
        Ok(Self::from_packed(packed))
    }
}
