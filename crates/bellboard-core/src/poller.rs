//! Playback status polling.
//!
//! One poll loop exists at a time. Triggering an action cancels any loop
//! already running before the action is sent, and every outstanding poll
//! carries the generation it was issued under so a response from a
//! superseded loop can never touch current state.

use std::time::{Duration, Instant};

use bellboard_client::DeviceService;
use bellboard_types::error::Result;

/// Ticket for one in-flight status poll. [`StatusPoller::apply_status`]
/// compares its generation against the current loop.
#[derive(Debug, Clone, Copy)]
pub struct PollHandle {
    generation: u64,
}

/// What applying a poll response did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Device still playing. The loop continues.
    Playing,
    /// Device reports playback finished. The loop stops.
    Finished,
    /// The poll failed. The loop stops; treat the device as idle.
    Failed,
    /// The response belongs to a superseded loop and was discarded.
    Stale,
}

/// Cancel-before-start poll loop driver.
pub struct StatusPoller {
    action_path: String,
    status_path: String,
    interval: Duration,
    generation: u64,
    next_poll: Option<Instant>,
}

impl StatusPoller {
    pub fn new(action_path: &str, status_path: &str, interval: Duration) -> Self {
        Self {
            action_path: action_path.to_string(),
            status_path: status_path.to_string(),
            interval,
            generation: 0,
            next_poll: None,
        }
    }

    /// Whether a poll loop is currently running.
    pub fn is_polling(&self) -> bool {
        self.next_poll.is_some()
    }

    /// Stop the current loop. Any poll still in flight becomes stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.next_poll = None;
    }

    /// Send the action and start a fresh poll loop.
    ///
    /// Any running loop is cancelled first, even if the action then fails.
    /// A failed action leaves the poller idle and propagates the error.
    pub fn trigger(&mut self, svc: &mut dyn DeviceService, now: Instant) -> Result<()> {
        self.cancel();
        svc.post(&self.action_path, None)?;
        self.next_poll = Some(now + self.interval);
        Ok(())
    }

    /// If a poll is due, issue a handle for it and schedule the next one.
    ///
    /// The caller performs the status fetch and feeds the result back
    /// through [`apply_status`](Self::apply_status).
    pub fn tick(&mut self, now: Instant) -> Option<PollHandle> {
        let due = self.next_poll?;
        if now < due {
            return None;
        }
        self.next_poll = Some(now + self.interval);
        Some(PollHandle {
            generation: self.generation,
        })
    }

    /// Fetch the playing status for one issued handle.
    pub fn fetch(&self, svc: &mut dyn DeviceService) -> Result<bool> {
        bellboard_client::service::fetch_playing(svc, &self.status_path)
    }

    /// Apply a poll response. Responses from superseded loops are
    /// discarded; a `false` status or an error stops the loop.
    pub fn apply_status(&mut self, handle: PollHandle, status: Result<bool>) -> PollOutcome {
        if handle.generation != self.generation {
            return PollOutcome::Stale;
        }
        match status {
            Ok(true) => PollOutcome::Playing,
            Ok(false) => {
                self.next_poll = None;
                PollOutcome::Finished
            },
            Err(err) => {
                log::warn!("status poll failed, treating device as idle: {err}");
                self.next_poll = None;
                PollOutcome::Failed
            },
        }
    }

    /// Deadline of the next poll, if a loop is running.
    pub fn next_poll_at(&self) -> Option<Instant> {
        self.next_poll
    }
}
