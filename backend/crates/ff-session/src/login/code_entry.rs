use crate::login::{MASK_EMPTY, MASK_ENTERED};

use ff_core::UserAccount;

/// Keypad state for the selected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    account: UserAccount,
    buffer: String,
    error: Option<String>,
}

impl CodeEntry {
    pub(crate) fn new(account: UserAccount) -> Self {
        Self {
            account,
            buffer: String::new(),
            error: None,
        }
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Inline error from the last failed submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn title(&self) -> String {
        format!("Enter code for {}", self.account.name)
    }

    /// One mask per entered digit, padded to the code length.
    pub fn masked(&self) -> String {
        let entered = self.buffer.chars().count();
        let remaining = self.account.code_len().saturating_sub(entered);
        std::iter::repeat_n(MASK_ENTERED, entered)
            .chain(std::iter::repeat_n(MASK_EMPTY, remaining))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.chars().count() >= self.account.code_len()
    }

    /// Appends an ASCII digit unless the buffer is already at code length.
    pub(crate) fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.is_full() {
            return false;
        }
        self.buffer.push(digit);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
    }

    pub(crate) fn matches(&self) -> bool {
        self.account.code_matches(&self.buffer)
    }

    pub(crate) fn reject(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.buffer.clear();
    }
}
