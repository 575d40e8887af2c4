//! Color and metric theme for the panel widgets.

use bellboard_types::backend::Color;

/// Visual theme shared by all widgets through [`DrawContext`](crate::DrawContext).
#[derive(Debug, Clone)]
pub struct Theme {
    pub surface: Color,
    pub border_subtle: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_disabled: Color,
    pub input_bg: Color,
    pub input_border: Color,
    pub input_border_focus: Color,
    pub font_size_sm: u16,
    pub font_size_md: u16,
    /// Height of one option row in the filter checklist.
    pub row_height: u32,
    /// Side length of the checkbox glyph.
    pub checkbox_size: u32,
}

impl Theme {
    /// Default dark theme.
    pub fn dark() -> Self {
        Self {
            surface: Color::rgb(24, 26, 32),
            border_subtle: Color::rgb(58, 62, 72),
            accent: Color::rgb(86, 156, 214),
            text_primary: Color::rgb(230, 230, 235),
            text_disabled: Color::rgb(120, 124, 134),
            input_bg: Color::rgb(32, 34, 42),
            input_border: Color::rgb(70, 74, 86),
            input_border_focus: Color::rgb(86, 156, 214),
            font_size_sm: 12,
            font_size_md: 14,
            row_height: 20,
            checkbox_size: 12,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
