//! Front-end receivers for engine reports.

use tally_tictactoe::{Notification, NotificationSink, ScoreSink};
use tracing::debug;

/// Last scores pushed by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorePanel {
    x: u32,
    o: u32,
}

impl ScorePanel {
    /// Scores as `(x, o)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.x, self.o)
    }
}

impl ScoreSink for ScorePanel {
    fn scores_changed(&mut self, x: u32, o: u32) {
        debug!(x, o, "Score panel updated");
        self.x = x;
        self.o = o;
    }
}

/// Transient end-of-round message, held until the user dismisses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toast {
    pending: Option<Notification>,
}

impl Toast {
    /// The notification on screen, if any.
    pub fn current(&self) -> Option<Notification> {
        self.pending
    }

    /// Removes the notification, returning it.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.pending.take()
    }
}

impl NotificationSink for Toast {
    fn notify(&mut self, notification: Notification) {
        debug!(?notification, "Toast shown");
        self.pending = Some(notification);
    }
}
