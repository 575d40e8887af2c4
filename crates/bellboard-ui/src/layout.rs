//! Layout helpers.

/// Edge padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const ZERO: Padding = Padding::all(0);

    pub const fn all(v: u16) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Inner rect after applying this padding to an outer rect.
    pub fn inner_rect(&self, x: i32, y: i32, w: u32, h: u32) -> (i32, i32, u32, u32) {
        (
            x + self.left as i32,
            y + self.top as i32,
            w.saturating_sub((self.left + self.right) as u32),
            h.saturating_sub((self.top + self.bottom) as u32),
        )
    }
}

/// Offset that centers an `inner` extent within an `outer` extent.
pub fn center(outer: u32, inner: u32) -> i32 {
    (outer.saturating_sub(inner) / 2) as i32
}
