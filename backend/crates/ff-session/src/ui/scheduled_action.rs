use crate::{Destination, Navigator};

use std::time::Duration;

/// A navigation the caller should perform once `delay` has elapsed.
///
/// Returned instead of run so the notification that precedes it has time to
/// render, and so the state before the page change can be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAction {
    pub delay: Duration,
    pub destination: Destination,
}

impl ScheduledAction {
    pub fn navigate_after(destination: Destination, delay: Duration) -> Self {
        Self { delay, destination }
    }

    pub fn run(self, navigator: &mut dyn Navigator) {
        navigator.navigate(self.destination);
    }
}
