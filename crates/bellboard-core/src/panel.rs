//! The control panel: every widget plus the device-facing state, wired
//! together for a tick-driven host.

use std::time::{Duration, Instant};

use bellboard_client::wire::DoorSide;
use bellboard_client::{DeviceService, service};
use bellboard_types::backend::TextureId;
use bellboard_types::config::PanelConfig;
use bellboard_types::error::Result;
use bellboard_ui::{DrawContext, SelectFilter, StatusIndicator, VolumeControl, Widget};

use crate::poller::{PollOutcome, StatusPoller};
use crate::sections::{Section, SectionVisibility};
use crate::sound_list::SoundList;

/// Volume assumed when the device will not report one.
const FALLBACK_VOLUME: u8 = 50;

/// Top-level panel state.
pub struct Panel {
    pub filter: SelectFilter,
    pub volume: VolumeControl,
    pub indicator: StatusIndicator,
    pub sounds: SoundList,
    pub sections: SectionVisibility,
    poller: StatusPoller,
}

impl Panel {
    /// Build the panel from the device's current state.
    ///
    /// Each fetch degrades independently: a device that answers none of
    /// them still yields a usable panel with an empty option set, an
    /// empty sound list, and the fallback volume.
    pub fn load(
        svc: &mut dyn DeviceService,
        config: &PanelConfig,
        active_tex: TextureId,
        idle_tex: TextureId,
    ) -> Self {
        let options = service::fetch_options(svc, &config.options_path).unwrap_or_else(|err| {
            log::warn!("option fetch failed, starting with an empty set: {err}");
            Vec::new()
        });
        let volume = service::fetch_volume(svc).unwrap_or_else(|err| {
            log::warn!("volume fetch failed, assuming {FALLBACK_VOLUME}: {err}");
            FALLBACK_VOLUME
        });

        let mut sounds = SoundList::default();
        if let Err(err) = sounds.reload(svc) {
            log::warn!("sound list fetch failed, starting empty: {err}");
        }

        Self {
            filter: SelectFilter::new(options, config.default_checked, config.default_hidden),
            volume: VolumeControl::new(volume),
            indicator: StatusIndicator::new(active_tex, idle_tex),
            sounds,
            sections: SectionVisibility::new(),
            poller: StatusPoller::new(
                &config.play_path,
                &config.status_path,
                Duration::from_millis(config.poll_interval_ms),
            ),
        }
    }

    /// Send the play action and start watching for completion.
    ///
    /// A rejected action leaves the panel idle.
    pub fn play(&mut self, svc: &mut dyn DeviceService, now: Instant) -> Result<()> {
        match self.poller.trigger(svc, now) {
            Ok(()) => {
                self.indicator.set_active();
                Ok(())
            },
            Err(err) => {
                self.indicator.set_idle();
                Err(err)
            },
        }
    }

    /// Advance the poll loop. Call once per host tick.
    pub fn tick(&mut self, svc: &mut dyn DeviceService, now: Instant) -> Option<PollOutcome> {
        let handle = self.poller.tick(now)?;
        let status = self.poller.fetch(svc);
        let outcome = self.poller.apply_status(handle, status);
        match outcome {
            PollOutcome::Playing => self.indicator.set_active(),
            PollOutcome::Finished | PollOutcome::Failed => self.indicator.set_idle(),
            PollOutcome::Stale => {},
        }
        Some(outcome)
    }

    pub fn is_playing(&self) -> bool {
        self.indicator.is_active()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_polling()
    }

    /// Push a new volume to the device, then mirror it locally.
    pub fn set_volume(&mut self, svc: &mut dyn DeviceService, level: u8) -> Result<()> {
        service::set_volume(svc, level.min(100))?;
        self.volume.set_level(level);
        Ok(())
    }

    /// Toggle mute locally and push the resulting level. A rejected push
    /// is logged; the local state stands. Returns the new level.
    pub fn toggle_mute(&mut self, svc: &mut dyn DeviceService) -> u8 {
        let level = self.volume.toggle_mute();
        if let Err(err) = service::set_volume(svc, level) {
            log::warn!("volume update not accepted by device: {err}");
        }
        level
    }

    /// Re-fetch the option set and the sound list.
    ///
    /// A failed option fetch still refreshes, with an empty set, so the
    /// widget never shows rows the device no longer has. Survivor
    /// selections come back on the next successful reload.
    pub fn reload(&mut self, svc: &mut dyn DeviceService, options_path: &str) {
        match service::fetch_options(svc, options_path) {
            Ok(options) => self.filter.refresh(options),
            Err(err) => {
                log::warn!("option reload failed, clearing the set: {err}");
                self.filter.refresh(Vec::new());
            },
        }
        if let Err(err) = self.sounds.reload(svc) {
            log::warn!("sound list reload failed, keeping the previous list: {err}");
        }
    }

    pub fn toggle_door(
        &mut self,
        svc: &mut dyn DeviceService,
        id: u64,
        side: DoorSide,
    ) -> Option<bool> {
        self.sounds.toggle(svc, id, side)
    }

    pub fn toggle_section(&mut self, section: Section) -> bool {
        self.sections.toggle(section)
    }

    /// Draw the whole panel top to bottom. Hidden sections take no space.
    pub fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32) -> Result<()> {
        let mut cur_y = y;

        if self.sections.is_visible(Section::Header) {
            self.indicator.draw(ctx, x, cur_y, 16, 16)?;
            ctx.label("bellboard", x + 22, cur_y + 2)?;
            cur_y += 20;

            let (_, vh) = self.volume.measure(ctx, w, 0);
            self.volume.draw(ctx, x, cur_y, w, vh)?;
            cur_y += vh as i32 + 4;
        }

        if self.sections.is_visible(Section::Sounds) {
            let (_, sh) = self.filter.search.measure(ctx, w, 0);
            self.filter.search.draw(ctx, x, cur_y, w, sh)?;
            cur_y += sh as i32 + 4;

            let (_, fh) = self.filter.measure(ctx, w, 0);
            self.filter.draw(ctx, x, cur_y, w, fh)?;
            cur_y += fh as i32 + 4;

            for row in self.sounds.rows() {
                let open = if row.on_open { "O" } else { "-" };
                let close = if row.on_close { "C" } else { "-" };
                let line = format!("[{open}{close}] {}", row.name);
                ctx.label_styled(
                    &line,
                    x,
                    cur_y,
                    ctx.theme.font_size_sm,
                    ctx.theme.text_primary,
                )?;
                cur_y += ctx.theme.row_height as i32;
            }
        }

        if self.sections.is_visible(Section::Footer) {
            let status = if self.is_playing() { "Playing" } else { "Idle" };
            ctx.label_styled(
                status,
                x,
                cur_y,
                ctx.theme.font_size_sm,
                ctx.theme.text_disabled,
            )?;
        }
        Ok(())
    }
}
