use crate::{Notification, Notifier};

use ff_core::ADMIN_UNLOCK_CODES;
use ff_store::SessionStore;

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOutcome {
    Unlocked,
    Rejected,
}

/// Admin state as shown on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStatus {
    pub unlocked: bool,
}

impl AdminStatus {
    pub fn label(&self) -> &'static str {
        if self.unlocked {
            "Admin: unlocked"
        } else {
            "Admin: locked"
        }
    }

    pub fn tools_visible(&self) -> bool {
        self.unlocked
    }
}

/// Single-shot gate that sets the persisted admin flag.
///
/// There is no way to lock again; a wrong code never clears the flag.
#[derive(Debug, Clone)]
pub struct AdminLatch {
    codes: Vec<String>,
}

impl AdminLatch {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn status(store: &SessionStore) -> AdminStatus {
        AdminStatus {
            unlocked: store.is_admin_unlocked(),
        }
    }

    /// `input` is trimmed, then matched exactly against every accepted code.
    pub fn submit(
        &self,
        store: &mut SessionStore,
        input: &str,
        notifier: &mut dyn Notifier,
    ) -> AdminOutcome {
        let candidate = input.trim();

        if self.codes.iter().any(|code| code == candidate) {
            store.set_admin_unlocked();
            notifier.notify(Notification::success("Admin unlocked"));
            info!("Admin controls unlocked");
            AdminOutcome::Unlocked
        } else {
            notifier.notify(Notification::warning("Wrong admin code"));
            warn!("Rejected admin code");
            AdminOutcome::Rejected
        }
    }
}

impl Default for AdminLatch {
    fn default() -> Self {
        Self::new(ADMIN_UNLOCK_CODES.iter().copied())
    }
}
