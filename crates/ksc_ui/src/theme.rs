//! Theme configuration for Kitchen Salt Calc.
//!
//! Custom colors for the result grid plus shared spacing and font sizes.

use iced::Color;

/// Application colors (dark theme; grid accents match the original page).
pub mod colors {
    use super::Color;

    /// Seasoning header cell background (green)
    pub const HEADER_BG: Color = Color::from_rgb(0.11, 0.47, 0.30);

    /// Container name cell background (red)
    pub const CONTAINER_CELL: Color = Color::from_rgb(0.72, 0.16, 0.23);

    /// Leading header cell background (orange)
    pub const ACCENT: Color = Color::from_rgb(0.90, 0.43, 0.15);

    /// Value cell background
    pub const CELL: Color = Color::from_rgb(0.14, 0.14, 0.14);

    /// Alternate-row value cell background
    pub const CELL_ALT: Color = Color::from_rgb(0.17, 0.17, 0.17);

    /// Text on colored cells
    pub const TEXT_ON_ACCENT: Color = Color::from_rgb(0.97, 0.97, 0.97);

    /// Secondary text (status line)
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Error text (invalid JSON indicator)
    pub const ERROR_TEXT: Color = Color::from_rgb(0.90, 0.35, 0.35);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Large font size
    pub const LG: f32 = 16.0;
    /// Header font size
    pub const HEADER: f32 = 18.0;
}
