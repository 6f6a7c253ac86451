use crate::login::{INCORRECT_MESSAGE, LOGGED_IN_MESSAGE, WRONG_CODE_MESSAGE};
use crate::{
    CodeEntry, Destination, LoginState, Notification, Notifier, Result as SessionResult,
    ScheduledAction, SessionError,
};

use ff_core::{Roster, UserAccount};
use ff_store::SessionStore;

use std::time::Duration;

use log::{debug, info, warn};

/// What the login page does when it is opened.
#[derive(Debug)]
pub enum LoginBoot {
    /// Someone is already logged in; go straight there.
    Redirect(Destination),
    Ready(LoginMachine),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session recorded; run the action to leave the login page.
    Authenticated(ScheduledAction),
    /// Wrong code; the keypad was reset.
    Rejected,
    /// No account is selected.
    Ignored,
}

/// Drives the login keypad.
///
/// No lockout or attempt counting: a wrong code can be retried immediately.
#[derive(Debug)]
pub struct LoginMachine {
    roster: Roster,
    state: LoginState,
    navigate_delay: Duration,
}

impl LoginMachine {
    pub fn new(roster: Roster, navigate_delay: Duration) -> Self {
        Self {
            roster,
            state: LoginState::ProfileSelection,
            navigate_delay,
        }
    }

    /// Skips the keypad entirely when the store already holds a session.
    pub fn boot(store: &SessionStore, navigate_delay: Duration) -> LoginBoot {
        if let Some(user) = store.current_user() {
            info!("Already logged in as {user}, redirecting to hub");
            return LoginBoot::Redirect(Destination::Hub);
        }

        LoginBoot::Ready(Self::new(store.roster().clone(), navigate_delay))
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Accounts for the profile grid, in roster order.
    pub fn accounts(&self) -> &[UserAccount] {
        self.roster.accounts()
    }

    pub fn code_entry(&self) -> Option<&CodeEntry> {
        match &self.state {
            LoginState::CodeEntry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Opens the keypad for `name` with an empty buffer and no error.
    pub fn select_profile(&mut self, name: &str) -> SessionResult<()> {
        if let LoginState::Authenticated { user } = &self.state {
            debug!("Ignoring profile selection, already authenticated as {user}");
            return Ok(());
        }

        let account = self
            .roster
            .find(name)
            .cloned()
            .ok_or_else(|| SessionError::unknown_account(name))?;

        debug!("Selected profile {}", account.name);
        self.state = LoginState::CodeEntry(CodeEntry::new(account));
        Ok(())
    }

    /// Returns whether the digit was accepted.
    pub fn press_digit(&mut self, digit: char) -> bool {
        match &mut self.state {
            LoginState::CodeEntry(entry) => entry.push_digit(digit),
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        if let LoginState::CodeEntry(entry) = &mut self.state {
            entry.clear();
        }
    }

    /// Back to the profile grid, discarding the buffer.
    pub fn back(&mut self) {
        if matches!(self.state, LoginState::CodeEntry(_)) {
            self.state = LoginState::ProfileSelection;
        }
    }

    /// Compares the buffer with the selected account's code.
    ///
    /// On a match the session is written to `store` before the success
    /// notification; the returned action performs the page change.
    pub fn submit(
        &mut self,
        store: &mut SessionStore,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let LoginState::CodeEntry(entry) = &mut self.state else {
            return SubmitOutcome::Ignored;
        };

        if !entry.matches() {
            warn!("Wrong code entered for {}", entry.account().name);
            entry.reject(WRONG_CODE_MESSAGE);
            notifier.notify(Notification::warning(INCORRECT_MESSAGE));
            return SubmitOutcome::Rejected;
        }

        let user = entry.account().name.clone();
        store.set_current_user(&user);
        store.initialize_profiles();
        notifier.notify(Notification::success(LOGGED_IN_MESSAGE));
        info!("{user} logged in");

        self.state = LoginState::Authenticated { user };
        SubmitOutcome::Authenticated(ScheduledAction::navigate_after(
            Destination::Hub,
            self.navigate_delay,
        ))
    }
}
