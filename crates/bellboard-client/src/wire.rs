//! Wire shapes exchanged with the device service.

use serde::{Deserialize, Serialize};

/// `GET /is_playing` response.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlayingStatus {
    pub is_playing: bool,
}

/// One entry from `GET /sounds`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoundEntry {
    pub id: u64,
    pub name: String,
    pub on_open: bool,
    pub on_close: bool,
}

/// `GET /volume` response and `POST /volume` body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeLevel {
    pub volume: u8,
}

/// Which door transition a sound is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorSide {
    Open,
    Close,
}

impl DoorSide {
    /// Field name in the `POST /toggle_state/{id}` payload.
    pub fn field(self) -> &'static str {
        match self {
            Self::Open => "on_open",
            Self::Close => "on_close",
        }
    }
}
