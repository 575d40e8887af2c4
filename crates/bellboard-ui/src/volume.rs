//! Volume bar with tiered icon label and mute toggle.

use bellboard_types::error::Result;

use crate::context::DrawContext;
use crate::widget::Widget;

/// Restore level used when unmuting with no remembered level.
const DEFAULT_RESTORE_LEVEL: u8 = 50;

/// Icon tier for the current level. Tier boundaries follow the device's
/// display convention: exact zero is muted, 99 and 100 both read as full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    Medium,
    High,
    Full,
}

impl VolumeIcon {
    pub fn for_level(level: u8) -> Self {
        if level == 0 {
            Self::Muted
        } else if level < 10 {
            Self::Low
        } else if level < 50 {
            Self::Medium
        } else if level < 99 {
            Self::High
        } else {
            Self::Full
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Muted => "[x]",
            Self::Low => "[.]",
            Self::Medium => "[-]",
            Self::High => "[=]",
            Self::Full => "[#]",
        }
    }
}

/// Volume control: a level bar plus a mute toggle that remembers the
/// level it muted from.
pub struct VolumeControl {
    level: u8,
    /// Level to restore on unmute. Tracks the last nonzero level seen.
    last_volume: u8,
}

impl VolumeControl {
    pub fn new(level: u8) -> Self {
        let level = level.min(100);
        Self {
            level,
            last_volume: if level > 0 { level } else { DEFAULT_RESTORE_LEVEL },
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::for_level(self.level)
    }

    pub fn is_muted(&self) -> bool {
        self.level == 0
    }

    /// Set the level, clamped to 0..=100. Nonzero levels become the
    /// unmute restore point.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        if self.level > 0 {
            self.last_volume = self.level;
        }
    }

    /// Toggle mute. Muting remembers the current level; unmuting restores
    /// it. Returns the new level.
    pub fn toggle_mute(&mut self) -> u8 {
        if self.level == 0 {
            self.level = self.last_volume;
        } else {
            self.last_volume = self.level;
            self.level = 0;
        }
        self.level
    }
}

impl Widget for VolumeControl {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let h = ctx.backend.measure_text_height(ctx.theme.font_size_md) + 6;
        (available_w, h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let icon = self.icon().glyph();
        ctx.label(icon, x, y)?;

        let icon_w = ctx.measure_text(icon) + 6;
        let label = format!("{}%", self.level);
        let label_w = ctx.measure_text(&label) + 6;

        // Bar track between the icon and the percentage label.
        let bar_x = x + icon_w as i32;
        let bar_w = w.saturating_sub(icon_w + label_w);
        ctx.backend
            .stroke_rect(bar_x, y, bar_w, h, 1, ctx.theme.border_subtle)?;

        let filled = (bar_w.saturating_sub(2) as u64 * self.level as u64 / 100) as u32;
        if filled > 0 {
            ctx.backend.fill_rect(
                bar_x + 1,
                y + 1,
                filled,
                h.saturating_sub(2),
                ctx.theme.accent,
            )?;
        }

        ctx.label(&label, bar_x + bar_w as i32 + 6, y)
    }
}
