//! bellboard-ui: widget toolkit for the device-control panel.
//!
//! All rendering goes through the [`UiBackend`](bellboard_types::backend::UiBackend)
//! trait methods -- no platform-specific code. Widget state is plain data
//! the host mutates between frames; `draw` only reads.

pub mod context;
pub mod fuzzy;
pub mod indicator;
pub mod input_field;
pub mod layout;
pub mod select_filter;
pub mod theme;
pub mod volume;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use indicator::StatusIndicator;
pub use input_field::InputField;
pub use layout::Padding;
pub use select_filter::SelectFilter;
pub use theme::Theme;
pub use volume::{VolumeControl, VolumeIcon};
pub use widget::Widget;
