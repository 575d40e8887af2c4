//! Sound list with per-sound door-trigger toggles.

use bellboard_client::wire::{DoorSide, SoundEntry};
use bellboard_client::{DeviceService, service};
use bellboard_types::error::Result;

/// One sound and its door-trigger bindings.
#[derive(Debug, Clone)]
pub struct SoundRow {
    pub id: u64,
    pub name: String,
    pub on_open: bool,
    pub on_close: bool,
}

impl SoundRow {
    fn binding(&self, side: DoorSide) -> bool {
        match side {
            DoorSide::Open => self.on_open,
            DoorSide::Close => self.on_close,
        }
    }

    fn set_binding(&mut self, side: DoorSide, value: bool) {
        match side {
            DoorSide::Open => self.on_open = value,
            DoorSide::Close => self.on_close = value,
        }
    }
}

impl From<SoundEntry> for SoundRow {
    fn from(e: SoundEntry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            on_open: e.on_open,
            on_close: e.on_close,
        }
    }
}

/// Device sound list mirrored locally.
///
/// Toggles are optimistic: the local flip happens first and stands even
/// if the device rejects the update, matching what the user sees.
#[derive(Debug, Default)]
pub struct SoundList {
    rows: Vec<SoundRow>,
}

impl SoundList {
    pub fn from_entries(entries: Vec<SoundEntry>) -> Self {
        Self {
            rows: entries.into_iter().map(SoundRow::from).collect(),
        }
    }

    /// Replace the list from the device.
    pub fn reload(&mut self, svc: &mut dyn DeviceService) -> Result<()> {
        let entries = service::fetch_sounds(svc)?;
        self.rows = entries.into_iter().map(SoundRow::from).collect();
        Ok(())
    }

    pub fn rows(&self) -> &[SoundRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&SoundRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Flip one door-side binding and push it to the device. Returns the
    /// new local value, or `None` for an unknown id. A rejected push is
    /// logged; the local flip stands.
    pub fn toggle(&mut self, svc: &mut dyn DeviceService, id: u64, side: DoorSide) -> Option<bool> {
        let row = self.rows.iter_mut().find(|r| r.id == id)?;
        let value = !row.binding(side);
        row.set_binding(side, value);

        if let Err(err) = service::toggle_door(svc, id, side, value) {
            log::warn!("door toggle for sound {id} not accepted by device: {err}");
        }
        Some(value)
    }
}
