use crate::Notification;

/// Fire-and-forget notification display. Implementations dismiss on their own.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}
