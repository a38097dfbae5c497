//! 24-bit ANSI colors for the console transport's level tags.

use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const DIM: &'static str = "\x1b[2m";

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Foreground escape sequence.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Default palette per level.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => Self::new(189, 147, 249),
            Level::Info => Self::new(139, 233, 253),
            Level::Warn => Self::new(241, 250, 140),
            Level::Error => Self::new(255, 85, 85),
        }
    }
}

/// Wraps `text` in the color and a trailing reset.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}
