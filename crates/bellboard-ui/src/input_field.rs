//! InputField widget: text input with cursor.

use bellboard_types::error::Result;

use crate::context::DrawContext;
use crate::layout;
use crate::widget::Widget;

/// Text input field with cursor and optional placeholder.
pub struct InputField {
    pub text: String,
    pub placeholder: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            cursor_pos: 0,
            focused: false,
        }
    }

    /// Replace the text wholesale, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor_pos = self.text.chars().count();
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let byte_pos = self
            .text
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = self
                .text
                .char_indices()
                .nth(self.cursor_pos)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len());
            if byte_pos < self.text.len() {
                let ch_len = self.text[byte_pos..]
                    .chars()
                    .next()
                    .map_or(0, |c| c.len_utf8());
                self.text.drain(byte_pos..byte_pos + ch_len);
            }
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for InputField {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let h = ctx.backend.measure_text_height(ctx.theme.font_size_md) + 8;
        (available_w, h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.backend.fill_rect(x, y, w, h, ctx.theme.input_bg)?;

        let bc = if self.focused {
            ctx.theme.input_border_focus
        } else {
            ctx.theme.input_border
        };
        ctx.backend.stroke_rect(x, y, w, h, 1, bc)?;

        let fs = ctx.theme.font_size_md;
        let text_h = ctx.backend.measure_text_height(fs);
        let ty = y + layout::center(h, text_h);
        let tx = x + 4;

        if self.text.is_empty() {
            ctx.backend
                .draw_text(&self.placeholder, tx, ty, fs, ctx.theme.text_disabled)?;
        } else {
            ctx.backend
                .draw_text(&self.text, tx, ty, fs, ctx.theme.text_primary)?;

            // Cursor.
            if self.focused {
                let before = &self.text[..self
                    .text
                    .char_indices()
                    .nth(self.cursor_pos)
                    .map(|(i, _)| i)
                    .unwrap_or(self.text.len())];
                let cursor_x = tx + ctx.backend.measure_text(before, fs) as i32;
                ctx.backend
                    .fill_rect(cursor_x, ty, 1, text_h, ctx.theme.text_primary)?;
            }
        }
        Ok(())
    }
}
