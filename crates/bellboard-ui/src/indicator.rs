//! Playback status indicator.

use bellboard_types::backend::TextureId;
use bellboard_types::error::Result;

use crate::context::DrawContext;
use crate::widget::Widget;

/// Two-state indicator that blits one of a pair of textures.
pub struct StatusIndicator {
    active_tex: TextureId,
    idle_tex: TextureId,
    active: bool,
}

impl StatusIndicator {
    pub fn new(active_tex: TextureId, idle_tex: TextureId) -> Self {
        Self {
            active_tex,
            idle_tex,
            active: false,
        }
    }

    pub fn set_active(&mut self) {
        self.active = true;
    }

    pub fn set_idle(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Texture for the current state.
    pub fn texture(&self) -> TextureId {
        if self.active {
            self.active_tex
        } else {
            self.idle_tex
        }
    }
}

impl Widget for StatusIndicator {
    fn measure(&self, _ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        (16, 16)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.blit(self.texture(), x, y, w, h)
    }
}
