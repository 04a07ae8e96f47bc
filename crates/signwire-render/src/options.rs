use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RenderError;

/// Text size selector, mapped to font pixel heights.
///
/// `Small` renders two stacked lines of 8 pixels; the other sizes render a
/// single bottom-aligned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Full,
}

impl TextSize {
    /// Font pixel height for this size.
    pub fn px(self) -> f32 {
        match self {
            TextSize::Small => 8.0,
            TextSize::Medium => 11.0,
            TextSize::Full => 15.0,
        }
    }

    /// Whether text is split across two stacked half-height lines.
    pub fn two_line(self) -> bool {
        matches!(self, TextSize::Small)
    }
}

impl FromStr for TextSize {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(TextSize::Small),
            "medium" => Ok(TextSize::Medium),
            "full" => Ok(TextSize::Full),
            other => Err(RenderError::InvalidSize(other.to_string())),
        }
    }
}

/// Base color for rendered text.
///
/// Yellow lights both channels; the hardware mixes red and green into amber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Red,
    Green,
    Yellow,
}

impl TextColor {
    pub fn lights_red(self) -> bool {
        matches!(self, TextColor::Red | TextColor::Yellow)
    }

    pub fn lights_green(self) -> bool {
        matches!(self, TextColor::Green | TextColor::Yellow)
    }
}

impl FromStr for TextColor {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(TextColor::Red),
            "green" => Ok(TextColor::Green),
            "yellow" => Ok(TextColor::Yellow),
            other => Err(RenderError::InvalidColor(other.to_string())),
        }
    }
}

/// Everything a rendering request needs besides the text itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub size: TextSize,
    pub color: TextColor,
    /// Explicit font file tried before the built-in candidate list.
    pub font_path: Option<PathBuf>,
    /// Flip lit/unlit in the channel(s) matching the selected color.
    pub invert: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: TextSize::Full,
            color: TextColor::Red,
            font_path: None,
            invert: false,
        }
    }
}
