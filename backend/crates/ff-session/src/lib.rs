//! Page logic for the login keypad, the hub and the admin latch.
//!
//! Pages borrow the `SessionStore` per call and report side effects through
//! the `Notifier` and `Navigator` collaborators. Delayed navigation is handed
//! back to the caller as a `ScheduledAction` instead of being run here.

pub mod admin;
pub mod error;
pub mod hub;
pub mod login;
pub mod ui;

pub use admin::{AdminLatch, AdminOutcome, AdminStatus};
pub use error::{Result, SessionError};
pub use hub::{HubBoot, HubPage, ShopOutcome, ShopSections};
pub use login::{CodeEntry, LoginBoot, LoginMachine, LoginState, SubmitOutcome};
pub use ui::destination::Destination;
pub use ui::navigator::Navigator;
pub use ui::notification::{Notification, NotificationKind};
pub use ui::notifier::Notifier;
pub use ui::scheduled_action::ScheduledAction;

#[cfg(test)]
mod tests;
