//! Chart theme presets.

use serde::{Deserialize, Serialize};

/// The small closed set of looks used by the chapter's figures.
///
/// `Gray` is the gray-background, white-grid look popularized by a certain
/// plotting package's defaults; `White` is the plain white background most
/// of the good examples use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Gray,
    White,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::White
    }
}

impl Theme {
    /// Parse a theme name from configuration.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "gray" | "grey" => Some(Theme::Gray),
            "white" => Some(Theme::White),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Grid line color appropriate for the background.
    pub fn grid_color(&self) -> &'static str {
        match self {
            Theme::Gray => "#ffffff",
            Theme::White => "#d9d9d9",
            Theme::Dark => "#3a3a3a",
        }
    }

    /// Plot background color, if the theme paints one.
    pub fn background(&self) -> Option<&'static str> {
        match self {
            Theme::Gray => Some("#ebebeb"),
            Theme::White => None,
            Theme::Dark => Some("#1f1f1f"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_spellings_of_gray() {
        assert_eq!(Theme::parse("gray"), Some(Theme::Gray));
        assert_eq!(Theme::parse("grey"), Some(Theme::Gray));
        assert_eq!(Theme::parse("mauve"), None);
    }

    #[test]
    fn gray_theme_uses_white_grid_lines() {
        assert_eq!(Theme::Gray.grid_color(), "#ffffff");
        assert_eq!(Theme::Gray.background(), Some("#ebebeb"));
        assert_eq!(Theme::White.background(), None);
    }
}
