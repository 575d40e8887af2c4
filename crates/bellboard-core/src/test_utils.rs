//! Shared test doubles for bellboard-core.

use std::collections::HashMap;

use bellboard_client::DeviceService;
use bellboard_types::backend::{Color, GLYPH_WIDTH, TextureId, UiBackend};
use bellboard_types::error::{BoardError, Result};
use serde_json::Value;

/// Device double with per-path canned GET responses and recorded posts.
pub struct ScriptedService {
    responses: HashMap<String, Value>,
    posts: Vec<(String, Option<Value>)>,
    fail_posts: bool,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            posts: Vec::new(),
            fail_posts: false,
        }
    }

    pub fn respond(&mut self, path: &str, value: Value) {
        self.responses.insert(path.to_string(), value);
    }

    pub fn drop_response(&mut self, path: &str) {
        self.responses.remove(path);
    }

    pub fn fail_posts(&mut self) {
        self.fail_posts = true;
    }

    pub fn posts(&self) -> &[(String, Option<Value>)] {
        &self.posts
    }
}

impl DeviceService for ScriptedService {
    fn get(&mut self, path: &str) -> Result<Value> {
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| BoardError::Service(format!("no response for {path}")))
    }

    fn post(&mut self, path: &str, body: Option<&Value>) -> Result<()> {
        if self.fail_posts {
            return Err(BoardError::HttpStatus(500));
        }
        self.posts.push((path.to_string(), body.cloned()));
        Ok(())
    }
}

/// Backend double recording text and blit calls.
pub struct RecordingBackend {
    pub texts: Vec<String>,
    pub blits: Vec<TextureId>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            blits: Vec::new(),
        }
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }
}

impl UiBackend for RecordingBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32, _color: Color) -> Result<()> {
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        _x: i32,
        _y: i32,
        _w: u32,
        _h: u32,
        _thickness: u32,
        _color: Color,
    ) -> Result<()> {
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _x: i32,
        _y: i32,
        _font_size: u16,
        _color: Color,
    ) -> Result<()> {
        self.texts.push(text.to_string());
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
        self.blits.push(tex);
        Ok(())
    }

    fn load_texture(&mut self, _width: u32, _height: u32, _rgba_data: &[u8]) -> Result<TextureId> {
        Ok(TextureId(0))
    }

    fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
        text.len() as u32 * GLYPH_WIDTH
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        font_size as u32
    }

    fn set_clip_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
