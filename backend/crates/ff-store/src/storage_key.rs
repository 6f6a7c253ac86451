/// Keys of the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Name of the logged-in account
    CurrentUser,
    /// JSON map of account name -> profile
    UsersData,
    /// "1" once admin is unlocked
    AdminFlag,
    /// "normal" or "plus"
    ShopMode,
    /// Reserved for Shop+ stock levels
    ShopStock,
    /// Date the mini-game was last started
    Played,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentUser => "ff_current_user",
            Self::UsersData => "ff_users_data",
            Self::AdminFlag => "ff_is_admin",
            Self::ShopMode => "ff_shop_mode",
            Self::ShopStock => "ff_shop_stock",
            Self::Played => "played",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
