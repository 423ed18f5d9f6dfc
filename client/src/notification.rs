use std::time::Duration;

use crate::timer;

/// Why the banner was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A click somewhere outside the banner. Never closes it.
    Clickaway,
    EscapeKeyDown,
    CloseButton,
    Timeout,
}

/// Identifies one showing of the banner, so a stale timer can't hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationState {
    visible: bool,
    shown: u64,
}

impl NotificationState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> Ticket {
        self.shown += 1;
        self.visible = true;
        Ticket(self.shown)
    }

    /// Returns whether the banner went from visible to hidden.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if reason == CloseReason::Clickaway {
            return false;
        }
        std::mem::replace(&mut self.visible, false)
    }

    /// Timer expiry for `ticket`. Ignored once the banner was shown again.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket != Ticket(self.shown) {
            return false;
        }
        self.close(CloseReason::Timeout)
    }
}

/// Waits out `timeout`, then hands the ticket back for expiry.
pub async fn expire_after(timeout: Duration, ticket: Ticket, expire: impl FnOnce(Ticket)) {
    timer::sleep(timeout).await;
    expire(ticket);
}
