use crate::{KeyValueStore, MemoryStore, StorageKey};

use ff_core::{ProfileFields, Roster, ShopMode, UserProfile};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, info, warn};

const ADMIN_UNLOCKED: &str = "1";
const PLAYED_DATE_FORMAT: &str = "%Y-%m-%d";

type ProfileMap = BTreeMap<String, UserProfile>;

/// Typed access to the household's persisted state.
///
/// Constructed once per process and handed by `&mut` to whichever page needs
/// it. Missing or malformed values read as absent.
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
    roster: Roster,
}

impl SessionStore {
    pub fn new(backend: Box<dyn KeyValueStore>, roster: Roster) -> Self {
        Self { backend, roster }
    }

    /// A store that forgets everything when dropped.
    pub fn in_memory(roster: Roster) -> Self {
        Self::new(Box::new(MemoryStore::new()), roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn is_persistent(&self) -> bool {
        self.backend.is_persistent()
    }

    // ---------------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------------

    /// Name of the logged-in account, if any. An empty value counts as none.
    pub fn current_user(&self) -> Option<String> {
        self.get(StorageKey::CurrentUser)
            .filter(|name| !name.is_empty())
    }

    pub fn set_current_user(&mut self, name: &str) {
        self.set(StorageKey::CurrentUser, name);
        info!("Session started for {name}");
    }

    pub fn clear_current_user(&mut self) {
        self.backend.remove(StorageKey::CurrentUser.as_str());
        info!("Session cleared");
    }

    // ---------------------------------------------------------------------
    // Profiles
    // ---------------------------------------------------------------------

    /// Returns the stored profile for `name`, creating defaults on first touch.
    ///
    /// Defaults are also created for every roster account, so once any
    /// profile has been read all accounts have one. Repeated calls without an
    /// intervening `save_profile` return the same value.
    pub fn profile_or_init(&mut self, name: &str) -> UserProfile {
        let mut profiles = self.load_profiles();
        let mut changed = self.seed_roster(&mut profiles);

        let profile = profiles
            .entry(name.to_string())
            .or_insert_with(|| {
                changed = true;
                UserProfile::for_account(name)
            })
            .clone();

        if changed {
            self.store_profiles(&profiles);
        }
        profile
    }

    /// Ensures every roster account has a profile.
    pub fn initialize_profiles(&mut self) {
        let mut profiles = self.load_profiles();
        if self.seed_roster(&mut profiles) {
            self.store_profiles(&profiles);
        }
    }

    /// Overwrites display name, email and phone for `name`.
    ///
    /// Values are trimmed. A blank display name falls back to the account
    /// name. The avatar is left as it was.
    pub fn save_profile(&mut self, name: &str, fields: &ProfileFields) -> UserProfile {
        let mut profiles = self.load_profiles();
        self.seed_roster(&mut profiles);

        let profile = profiles
            .entry(name.to_string())
            .or_insert_with(|| UserProfile::for_account(name));

        let display_name = fields.display_name.trim();
        profile.display_name = if display_name.is_empty() {
            name.to_string()
        } else {
            display_name.to_string()
        };
        profile.email = fields.email.trim().to_string();
        profile.phone = fields.phone.trim().to_string();

        let saved = profile.clone();
        self.store_profiles(&profiles);
        debug!("Saved profile for {name}");
        saved
    }

    /// Reads the profiles map entry by entry; a bad entry is dropped alone.
    fn load_profiles(&self) -> ProfileMap {
        let Some(raw) = self.get(StorageKey::UsersData) else {
            return ProfileMap::new();
        };

        let entries = match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed profile data: {e}");
                return ProfileMap::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|(name, value)| match serde_json::from_value::<UserProfile>(value) {
                Ok(mut profile) => {
                    if profile.display_name.trim().is_empty() {
                        profile.display_name = name.clone();
                    }
                    Some((name, profile))
                }
                Err(e) => {
                    warn!("Ignoring malformed profile for {name}: {e}");
                    None
                }
            })
            .collect()
    }

    fn seed_roster(&self, profiles: &mut ProfileMap) -> bool {
        let mut changed = false;
        for name in self.roster.names() {
            if !profiles.contains_key(name) {
                profiles.insert(name.to_string(), UserProfile::for_account(name));
                changed = true;
            }
        }
        changed
    }

    fn store_profiles(&mut self, profiles: &ProfileMap) {
        match serde_json::to_string(profiles) {
            Ok(json) => self.set(StorageKey::UsersData, &json),
            Err(e) => warn!("Failed to serialize profiles: {e}"),
        }
    }

    // ---------------------------------------------------------------------
    // Admin latch
    // ---------------------------------------------------------------------

    pub fn is_admin_unlocked(&self) -> bool {
        self.get(StorageKey::AdminFlag).as_deref() == Some(ADMIN_UNLOCKED)
    }

    /// One-way: nothing in the app clears the flag.
    pub fn set_admin_unlocked(&mut self) {
        self.set(StorageKey::AdminFlag, ADMIN_UNLOCKED);
        info!("Admin unlocked");
    }

    // ---------------------------------------------------------------------
    // Shop mode
    // ---------------------------------------------------------------------

    /// Stored shop mode; absent or unrecognised values read as normal.
    pub fn shop_mode(&self) -> ShopMode {
        self.get(StorageKey::ShopMode)
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_shop_mode(&mut self, mode: ShopMode) {
        self.set(StorageKey::ShopMode, mode.as_str());
    }

    // ---------------------------------------------------------------------
    // Mini-game
    // ---------------------------------------------------------------------

    /// Day the mini-game was last started.
    pub fn played_on(&self) -> Option<NaiveDate> {
        self.get(StorageKey::Played)
            .and_then(|raw| NaiveDate::parse_from_str(&raw, PLAYED_DATE_FORMAT).ok())
    }

    pub fn set_played_on(&mut self, date: NaiveDate) {
        self.set(
            StorageKey::Played,
            &date.format(PLAYED_DATE_FORMAT).to_string(),
        );
    }

    fn get(&self, key: StorageKey) -> Option<String> {
        self.backend.get(key.as_str())
    }

    fn set(&mut self, key: StorageKey, value: &str) {
        self.backend.set(key.as_str(), value);
    }
}
