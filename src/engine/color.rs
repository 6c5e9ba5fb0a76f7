use serde::{Deserialize, Serialize};

/// Linear RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// White with zero alpha; hides text while keeping its layout.
    pub const INVISIBLE: Color = Color::rgba(1.0, 1.0, 1.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// `#RRGGBBAA`, uppercase hex.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            channel_to_byte(self.a)
        )
    }

    pub(crate) fn channels(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_invisible() {
        assert_eq!(Color::INVISIBLE.to_hex(), "#FFFFFF00");
    }

    #[test]
    fn test_to_hex_rounds_channels() {
        assert_eq!(Color::rgba(0.5, 0.0, 1.0, 1.0).to_hex(), "#8000FFFF");
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(Color::rgba(2.0, -1.0, 0.0, 1.0).to_hex(), "#FF0000FF");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Color::WHITE.with_alpha(0.0), Color::INVISIBLE);
    }
}
