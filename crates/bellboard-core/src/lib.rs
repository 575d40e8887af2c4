//! bellboard-core: panel state and the playback poll loop.
//!
//! The host owns the tick: it calls [`Panel::tick`] with the current time
//! and draws through a [`bellboard_ui::DrawContext`]. Nothing in here
//! spawns threads or blocks beyond a single device request.

pub mod panel;
pub mod poller;
pub mod sections;
pub mod sound_list;

#[cfg(test)]
pub(crate) mod test_utils;

pub use panel::Panel;
pub use poller::{PollHandle, PollOutcome, StatusPoller};
pub use sections::{Section, SectionVisibility};
pub use sound_list::{SoundList, SoundRow};
