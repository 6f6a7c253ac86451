use serde::{Deserialize, Serialize};

/// Editable display metadata for one account, persisted in the profiles map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Empty when the stored entry had none; readers substitute the account name
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
}

impl UserProfile {
    /// Default profile for an account: its own name, no contact details.
    pub fn for_account(name: &str) -> Self {
        Self {
            display_name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            avatar: String::new(),
        }
    }
}
