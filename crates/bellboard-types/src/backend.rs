//! Render backend trait.
//!
//! The panel never talks to a concrete display. Everything it draws goes
//! through [`UiBackend`], a small capability set (fill, text, texture blit,
//! clip) that a host embeds with whatever display stack it has.

use crate::error::Result;

/// Nominal glyph width of the built-in bitmap font, used by backends that
/// have no real text measurement.
pub const GLYPH_WIDTH: u32 = 8;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// Opaque handle to a texture owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Minimum rendering capability set the widgets draw through.
pub trait UiBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    fn clear(&mut self, color: Color) -> Result<()>;

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw a rectangle outline of the given stroke thickness.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        thickness: u32,
        color: Color,
    ) -> Result<()>;

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId>;

    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    fn measure_text_height(&self, font_size: u16) -> u32;

    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    fn reset_clip_rect(&mut self) -> Result<()>;

    fn swap_buffers(&mut self) -> Result<()>;

    fn shutdown(&mut self) -> Result<()>;
}
