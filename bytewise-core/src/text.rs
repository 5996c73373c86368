//! Character codes: how each letter of a string is stored

/// Code point of one character with its binary and hex forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCode {
    pub ch: char,
    pub code: u32,
    /// Eight digits for ASCII, unpadded above it
    pub binary: String,
    /// Uppercase, at least two digits
    pub hex: String,
}

impl CharCode {
    pub fn new(ch: char) -> Self {
        let code = ch as u32;
        let binary = if ch.is_ascii() {
            format!("{:08b}", code)
        } else {
            format!("{:b}", code)
        };
        Self {
            ch,
            code,
            binary,
            hex: format!("{:02X}", code),
        }
    }

    /// Bytes needed to store this character as UTF-8
    pub fn utf8_len(&self) -> usize {
        self.ch.len_utf8()
    }
}

/// Decode every character of `text`
pub fn decode_text(text: &str) -> Vec<CharCode> {
    text.chars().map(CharCode::new).collect()
}
