use ff_session::{Destination, Navigator, Notification, Notifier};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Holds notifications until the page loop prints them.
///
/// A notification older than the dismiss interval is dropped unseen.
#[derive(Debug)]
pub struct ToastQueue {
    dismiss_after: Duration,
    pending: VecDeque<(Instant, Notification)>,
}

impl ToastQueue {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            pending: VecDeque::new(),
        }
    }

    /// Empties the queue, yielding only notifications still on screen.
    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        let dismiss_after = self.dismiss_after;
        self.pending
            .drain(..)
            .filter(move |(shown_at, _)| shown_at.elapsed() < dismiss_after)
            .map(|(_, notification)| notification)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        log::debug!("Toast: {notification}");
        self.pending.push_back((Instant::now(), notification));
    }
}

/// Tracks which page the loop should render next.
#[derive(Debug)]
pub struct PageNavigator {
    current: Destination,
}

impl PageNavigator {
    pub fn new(start: Destination) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Destination {
        self.current
    }
}

impl Navigator for PageNavigator {
    fn navigate(&mut self, destination: Destination) {
        log::info!("Navigating {} -> {destination}", self.current);
        self.current = destination;
    }
}
