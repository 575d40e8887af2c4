//! The device service seam.
//!
//! Everything the panel knows about the remote device goes through
//! [`DeviceService`]. The typed helpers below own the path strings and the
//! parse step so callers never touch raw JSON.

use serde_json::{Value, json};

use bellboard_types::error::Result;
use bellboard_types::option::SelectOption;

use crate::wire::{DoorSide, PlayingStatus, SoundEntry, VolumeLevel};

/// Abstract remote device service.
pub trait DeviceService {
    /// GET a path, expecting a JSON body.
    fn get(&mut self, path: &str) -> Result<Value>;

    /// POST a path with an optional JSON body. Any non-2xx response is an
    /// error.
    fn post(&mut self, path: &str, body: Option<&Value>) -> Result<()>;
}

/// Whether the device is currently playing a sound.
pub fn fetch_playing(svc: &mut dyn DeviceService, status_path: &str) -> Result<bool> {
    let value = svc.get(status_path)?;
    let status: PlayingStatus = serde_json::from_value(value)?;
    Ok(status.is_playing)
}

/// The device's configured sound list.
pub fn fetch_sounds(svc: &mut dyn DeviceService) -> Result<Vec<SoundEntry>> {
    let value = svc.get("/sounds")?;
    Ok(serde_json::from_value(value)?)
}

/// Current device volume (0-100).
pub fn fetch_volume(svc: &mut dyn DeviceService) -> Result<u8> {
    let value = svc.get("/volume")?;
    let level: VolumeLevel = serde_json::from_value(value)?;
    Ok(level.volume)
}

/// Set the device volume (0-100).
pub fn set_volume(svc: &mut dyn DeviceService, volume: u8) -> Result<()> {
    svc.post("/volume", Some(&json!({ "volume": volume })))
}

/// Flip one door-side binding for a sound.
pub fn toggle_door(svc: &mut dyn DeviceService, id: u64, side: DoorSide, value: bool) -> Result<()> {
    let path = format!("/toggle_state/{id}");
    svc.post(&path, Some(&json!({ side.field(): value })))
}

/// Option set for the filter widget.
pub fn fetch_options(svc: &mut dyn DeviceService, options_path: &str) -> Result<Vec<SelectOption>> {
    let value = svc.get(options_path)?;
    Ok(serde_json::from_value(value)?)
}
