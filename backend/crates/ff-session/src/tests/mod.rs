
use crate::{Destination, Navigator, Notification, NotificationKind, Notifier};

use ff_core::Roster;
use ff_store::SessionStore;

use std::time::Duration;

pub(crate) const DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) seen: Vec<Notification>,
}

impl RecordingNotifier {
    pub(crate) fn last(&self) -> Option<&Notification> {
        self.seen.last()
    }

    pub(crate) fn last_kind(&self) -> Option<NotificationKind> {
        self.last().map(|n| n.kind)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.seen.push(notification);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) visited: Vec<Destination>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.visited.push(destination);
    }
}

pub(crate) fn store() -> SessionStore {
    SessionStore::in_memory(Roster::household())
}
