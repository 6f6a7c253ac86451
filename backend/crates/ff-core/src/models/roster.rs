use crate::UserAccount;

/// Codes accepted by the admin unlock. Any one of them unlocks.
pub const ADMIN_UNLOCK_CODES: &[&str] = &["7772", "1994029", "080512", "1112"];

const HOUSEHOLD: &[(&str, &str)] = &[
    ("James", "080512"),
    ("Mum", "2206"),
    ("Dad", "2085"),
    ("Nannan", "4213"),
    ("Grandad Darren", "8765"),
    ("Grandma Jean", "1357"),
    ("Grandad Steve", "2468"),
    ("Uncle Paul", "1122"),
];

/// Ordered list of accounts shown on the login screen.
///
/// Names are not checked for uniqueness; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    accounts: Vec<UserAccount>,
}

impl Roster {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self { accounts }
    }

    /// The built-in household accounts.
    pub fn household() -> Self {
        Self::new(
            HOUSEHOLD
                .iter()
                .map(|(name, code)| UserAccount::new(*name, *code))
                .collect(),
        )
    }

    pub fn find(&self, name: &str) -> Option<&UserAccount> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::household()
    }
}
