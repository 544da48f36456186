use std::time::{Duration, Instant};

pub const DEFAULT_DELAY_MS: u64 = 250;

/// Quiescence timer for saving inputs. Every edit restarts the timer; a save
/// is due once no edit has arrived for `delay`.
#[derive(Debug, Clone)]
pub struct Autosave {
    delay: Duration,
    last_edit: Option<Instant>,
}

impl Autosave {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_edit: None,
        }
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// Time left before the pending save is due; `None` when nothing is
    /// pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_edit
            .map(|edited| self.delay.saturating_sub(now.saturating_duration_since(edited)))
    }

    /// Returns true once, when the pending save has waited out the delay.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.last_edit {
            Some(edited) if now.saturating_duration_since(edited) >= self.delay => {
                self.last_edit = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true when anything is pending, regardless of the delay.
    pub fn take_pending(&mut self) -> bool {
        self.last_edit.take().is_some()
    }

    pub fn cancel(&mut self) {
        self.last_edit = None;
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}
