pub mod points_entry;
pub mod profile_fields;
pub mod roster;
pub mod shop_item;
pub mod shop_mode;
pub mod user_account;
pub mod user_profile;
