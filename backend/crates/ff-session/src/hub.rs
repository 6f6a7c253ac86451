use crate::{AdminLatch, Destination, Notification, Notifier, ScheduledAction};

use ff_core::{
    LeaderboardRow, ProfileFields, ShopItem, ShopMode, UserProfile, initial_points,
    normal_shop_items, rank,
};
use ff_store::SessionStore;

use std::time::Duration;

use log::{info, warn};

#[derive(Debug)]
pub enum HubBoot {
    /// Nobody is logged in.
    Redirect(Destination),
    Ready(HubPage),
}

/// Which shop sections the hub shows.
///
/// In normal mode the Shop+ section stays visible with its "closed" text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopSections {
    pub mode: ShopMode,
    pub normal_visible: bool,
    pub plus_visible: bool,
}

impl ShopSections {
    pub fn for_mode(mode: ShopMode) -> Self {
        match mode {
            ShopMode::Normal => Self {
                mode,
                normal_visible: true,
                plus_visible: true,
            },
            ShopMode::Plus => Self {
                mode,
                normal_visible: false,
                plus_visible: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOutcome {
    Opened(ShopSections),
    AdminOnly,
}

/// The landing page for a logged-in user.
#[derive(Debug)]
pub struct HubPage {
    user: String,
    welcome_name: String,
    navigate_delay: Duration,
}

impl HubPage {
    /// Loads the current user's profile, or redirects to login without a session.
    ///
    /// The stored shop mode is normalised on the way in.
    pub fn boot(store: &mut SessionStore, navigate_delay: Duration) -> HubBoot {
        let Some(user) = store.current_user() else {
            info!("No session, redirecting to login");
            return HubBoot::Redirect(Destination::Login);
        };

        let profile = store.profile_or_init(&user);
        let mode = store.shop_mode();
        store.set_shop_mode(mode);

        HubBoot::Ready(Self {
            user,
            welcome_name: profile.display_name,
            navigate_delay,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn welcome_name(&self) -> &str {
        &self.welcome_name
    }

    pub fn profile(&self, store: &mut SessionStore) -> UserProfile {
        store.profile_or_init(&self.user)
    }

    /// Saves the signed-in user's own profile and refreshes the welcome line.
    pub fn edit_profile(
        &mut self,
        store: &mut SessionStore,
        fields: &ProfileFields,
    ) -> UserProfile {
        let profile = store.save_profile(&self.user, fields);
        self.welcome_name = profile.display_name.clone();
        profile
    }

    pub fn logout(
        &self,
        store: &mut SessionStore,
        notifier: &mut dyn Notifier,
    ) -> ScheduledAction {
        store.clear_current_user();
        notifier.notify(Notification::success("Logged out"));
        info!("{} logged out", self.user);
        ScheduledAction::navigate_after(Destination::Login, self.navigate_delay)
    }

    pub fn shop_sections(store: &SessionStore) -> ShopSections {
        ShopSections::for_mode(store.shop_mode())
    }

    /// Switches the shop. Admin only.
    pub fn open_shop(
        &self,
        store: &mut SessionStore,
        mode: ShopMode,
        notifier: &mut dyn Notifier,
    ) -> ShopOutcome {
        if !AdminLatch::status(store).unlocked {
            notifier.notify(Notification::warning("Admin only"));
            warn!("{} tried to switch shop without admin", self.user);
            return ShopOutcome::AdminOnly;
        }

        store.set_shop_mode(mode);
        let message = match mode {
            ShopMode::Normal => "Normal shop opened",
            ShopMode::Plus => "Shop+ mode enabled",
        };
        notifier.notify(Notification::success(message));
        info!("Shop mode set to {mode}");
        ShopOutcome::Opened(ShopSections::for_mode(mode))
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        rank(&initial_points())
    }

    pub fn catalog(&self) -> &'static [ShopItem] {
        normal_shop_items()
    }

    /// Shop+ has no listings while it is closed.
    pub fn shop_plus_items(&self) -> &'static [ShopItem] {
        &[]
    }
}
