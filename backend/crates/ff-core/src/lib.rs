pub mod catalog;
pub mod error;
pub mod leaderboard;
pub mod models;
pub mod theme;

pub use catalog::{SHOP_PLUS_STOCK, normal_shop_items};
pub use error::{CoreError, Result};
pub use leaderboard::{LeaderboardRow, initial_points, rank};
pub use models::points_entry::PointsEntry;
pub use models::profile_fields::ProfileFields;
pub use models::roster::{ADMIN_UNLOCK_CODES, Roster};
pub use models::shop_item::{ShopItem, ShopPrice};
pub use models::shop_mode::ShopMode;
pub use models::user_account::UserAccount;
pub use models::user_profile::UserProfile;
pub use theme::{Theme, ThemeMode, ThemeOverride};

/// Formats a non-negative amount with comma thousands separators (`12,345`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests;
