use serde::{Deserialize, Serialize};

/// A household member who can log in with a numeric code.
///
/// Accounts are static: names are the identity, codes never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub code: String,
}

impl UserAccount {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Number of digits the keypad accepts for this account.
    pub fn code_len(&self) -> usize {
        self.code.chars().count()
    }

    /// Exact string comparison against the stored code.
    pub fn code_matches(&self, entered: &str) -> bool {
        self.code == entered
    }

    /// Avatar initials: first letter of each word, uppercased ("Grandad Steve" -> "GS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
