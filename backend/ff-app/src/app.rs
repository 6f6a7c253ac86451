use crate::error::Result as AppResult;
use crate::terminal::{PageNavigator, ToastQueue};

use ff_config::{Config, GameConfig};
use ff_core::{ProfileFields, ShopMode, Theme, UserProfile};
use ff_game::{DailyPlayLock, Direction, GameSession, GameSettings, GameStatus, Rect};
use ff_session::{
    AdminLatch, Destination, HubBoot, HubPage, LoginBoot, LoginMachine, Navigator,
    ScheduledAction, ShopOutcome, SubmitOutcome,
};
use ff_store::SessionStore;

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use log::{debug, info};
use rand::RngCore;

enum Flow {
    Continue,
    Quit,
}

/// Line-driven host for the login, hub and game pages.
pub struct App<R, W> {
    input: R,
    output: W,
    store: SessionStore,
    navigate_delay: Duration,
    game_settings: GameSettings,
    walls: Vec<Rect>,
    theme: Theme,
    today: NaiveDate,
    admin: AdminLatch,
    toasts: ToastQueue,
    navigator: PageNavigator,
    rng: Box<dyn RngCore>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        input: R,
        output: W,
        store: SessionStore,
        config: &Config,
        today: NaiveDate,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            input,
            output,
            store,
            navigate_delay: config.ui.navigate_delay(),
            game_settings: game_settings(&config.game),
            walls: walls(&config.game),
            theme: Theme::for_date(today, config.ui.theme_override),
            today,
            admin: AdminLatch::default(),
            toasts: ToastQueue::new(config.ui.toast_dismiss()),
            navigator: PageNavigator::new(Destination::Login),
            rng,
        }
    }

    pub fn into_parts(self) -> (SessionStore, W) {
        (self.store, self.output)
    }

    /// Runs pages until `quit` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        info!("Theme: {}", self.theme.mode.as_str());
        if !self.store.is_persistent() {
            writeln!(self.output, "(storage unavailable, nothing will be saved)")?;
        }

        loop {
            let flow = match self.navigator.current() {
                Destination::Login => self.login_page()?,
                Destination::Hub => self.hub_page()?,
                Destination::Game => self.game_page()?,
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Login
    // ---------------------------------------------------------------------

    fn login_page(&mut self) -> AppResult<Flow> {
        let mut machine = match LoginMachine::boot(&self.store, self.navigate_delay) {
            LoginBoot::Redirect(destination) => {
                self.navigator.navigate(destination);
                return Ok(Flow::Continue);
            }
            LoginBoot::Ready(machine) => machine,
        };

        self.banner("FundsFlow")?;
        loop {
            match machine.code_entry() {
                None => {
                    writeln!(self.output, "Who are you?")?;
                    for (i, account) in machine.accounts().iter().enumerate() {
                        let initials = account.initials();
                        writeln!(self.output, "  {}. [{initials}] {}", i + 1, account.name)?;
                    }
                }
                Some(entry) => {
                    writeln!(self.output, "{}  {}", entry.title(), entry.masked())?;
                    if let Some(error) = entry.error() {
                        writeln!(self.output, "  {error}")?;
                    }
                    writeln!(self.output, "  digits, 'clear', 'back', or 'enter'")?;
                }
            }

            let Some(line) = self.prompt()? else {
                return Ok(Flow::Quit);
            };

            if line == "quit" {
                return Ok(Flow::Quit);
            }

            if machine.code_entry().is_none() {
                let name = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| machine.accounts().get(i))
                    .map(|account| account.name.clone())
                    .unwrap_or(line);
                if machine.select_profile(&name).is_err() {
                    writeln!(self.output, "No profile called {name}")?;
                }
                continue;
            }

            match line.as_str() {
                "clear" => machine.clear(),
                "back" => machine.back(),
                "enter" => {
                    let outcome = machine.submit(&mut self.store, &mut self.toasts);
                    self.flush_toasts()?;
                    if let SubmitOutcome::Authenticated(action) = outcome {
                        self.schedule(action);
                        return Ok(Flow::Continue);
                    }
                }
                digits => {
                    for digit in digits.chars() {
                        machine.press_digit(digit);
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Hub
    // ---------------------------------------------------------------------

    fn hub_page(&mut self) -> AppResult<Flow> {
        let mut hub = match HubPage::boot(&mut self.store, self.navigate_delay) {
            HubBoot::Redirect(destination) => {
                self.navigator.navigate(destination);
                return Ok(Flow::Continue);
            }
            HubBoot::Ready(hub) => hub,
        };

        self.banner(&format!("Welcome, {}", hub.welcome_name()))?;
        loop {
            let status = AdminLatch::status(&self.store);
            writeln!(
                self.output,
                "{} | profile, edit, admin <code>, leaderboard, shop, game, logout, quit",
                status.label()
            )?;

            let Some(line) = self.prompt()? else {
                return Ok(Flow::Quit);
            };
            let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

            match command {
                "quit" => return Ok(Flow::Quit),
                "profile" => {
                    let profile = hub.profile(&mut self.store);
                    writeln!(self.output, "{} {}", profile.avatar, profile.display_name)?;
                    writeln!(self.output, "  email: {}", profile.email)?;
                    writeln!(self.output, "  phone: {}", profile.phone)?;
                }
                "edit" => {
                    let current = hub.profile(&mut self.store);
                    let fields = edit_fields(rest, &current);
                    let profile = hub.edit_profile(&mut self.store, &fields);
                    writeln!(self.output, "Saved. Welcome, {}", profile.display_name)?;
                }
                "admin" => {
                    self.admin.submit(&mut self.store, rest, &mut self.toasts);
                    self.flush_toasts()?;
                }
                "leaderboard" => {
                    for row in hub.leaderboard() {
                        let points = row.points_label();
                        writeln!(self.output, "  {}. {} {points} pts", row.rank, row.name)?;
                    }
                }
                "shop" => match rest {
                    "normal" | "plus" => {
                        let mode = rest.parse::<ShopMode>().unwrap_or_default();
                        let outcome = hub.open_shop(&mut self.store, mode, &mut self.toasts);
                        self.flush_toasts()?;
                        if let ShopOutcome::Opened(_) = outcome {
                            self.render_shop(&hub)?;
                        }
                    }
                    _ => self.render_shop(&hub)?,
                },
                "game" => {
                    self.navigator.navigate(Destination::Game);
                    return Ok(Flow::Continue);
                }
                "logout" => {
                    let action = hub.logout(&mut self.store, &mut self.toasts);
                    self.flush_toasts()?;
                    self.schedule(action);
                    return Ok(Flow::Continue);
                }
                other => writeln!(self.output, "Unknown command: {other}")?,
            }
        }
    }

    fn render_shop(&mut self, hub: &HubPage) -> AppResult<()> {
        let sections = HubPage::shop_sections(&self.store);
        if sections.normal_visible {
            writeln!(self.output, "Shop")?;
            for item in hub.catalog() {
                writeln!(
                    self.output,
                    "  {} {} ({}) - {}",
                    item.emoji,
                    item.name,
                    item.price.label(),
                    item.description
                )?;
            }
        }
        if sections.plus_visible {
            let items = hub.shop_plus_items();
            if sections.mode == ShopMode::Plus && !items.is_empty() {
                writeln!(self.output, "Shop+")?;
                for item in items {
                    writeln!(self.output, "  {} {}", item.emoji, item.name)?;
                }
            } else {
                writeln!(self.output, "Shop+ is closed right now")?;
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Game
    // ---------------------------------------------------------------------

    fn game_page(&mut self) -> AppResult<Flow> {
        if self.store.current_user().is_none() {
            self.navigator.navigate(Destination::Login);
            return Ok(Flow::Continue);
        }

        if let Err(e) = DailyPlayLock::claim(&mut self.store, self.today) {
            debug!("{e}");
            writeln!(self.output, "You've already played today. Come back tomorrow!")?;
            self.navigator.navigate(Destination::Hub);
            return Ok(Flow::Continue);
        }

        let mut game = GameSession::new(
            self.game_settings.clone(),
            self.walls.clone(),
            self.rng.as_mut(),
        );
        self.banner("Collect them all!")?;

        let mut last_tick = Instant::now();
        while game.status() == GameStatus::Playing {
            let player = game.player();
            writeln!(
                self.output,
                "({:.0}, {:.0})  {}/{}  {}  w/a/s/d to move, 'leave' to stop",
                player.x,
                player.y,
                game.score(),
                game.target(),
                game.clock()
            )?;

            let Some(line) = self.prompt()? else {
                return Ok(Flow::Quit);
            };

            let elapsed = last_tick.elapsed().as_secs();
            for _ in 0..elapsed {
                game.tick();
            }
            last_tick += Duration::from_secs(elapsed);

            if line == "leave" {
                break;
            }
            for key in line.split_whitespace() {
                let keys = if key.starts_with("Arrow") {
                    vec![key.to_string()]
                } else {
                    key.chars().map(String::from).collect()
                };
                for direction in keys.iter().filter_map(|k| Direction::from_key(k)) {
                    game.move_player(direction);
                }
            }
        }

        match game.status() {
            GameStatus::Won => {
                writeln!(self.output, "You win! All {} collected.", game.target())?
            }
            GameStatus::Lost => writeln!(self.output, "Time's up! {} collected.", game.score())?,
            GameStatus::Playing => writeln!(self.output, "Game abandoned.")?,
        }
        self.navigator.navigate(Destination::Hub);
        Ok(Flow::Continue)
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn banner(&mut self, title: &str) -> AppResult<()> {
        let border = if self.theme.is_festive() { "🎄" } else { "==" };
        writeln!(self.output, "{border} {title} {border}")?;
        Ok(())
    }

    fn prompt(&mut self) -> AppResult<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn flush_toasts(&mut self) -> AppResult<()> {
        for toast in self.toasts.drain() {
            writeln!(self.output, "{toast}")?;
        }
        Ok(())
    }

    fn schedule(&mut self, action: ScheduledAction) {
        if !action.delay.is_zero() {
            std::thread::sleep(action.delay);
        }
        action.run(&mut self.navigator);
    }
}

/// Parses `name|email|phone`. Parts left off keep their stored value;
/// a part given as empty clears it.
pub(crate) fn edit_fields(input: &str, current: &UserProfile) -> ProfileFields {
    let mut parts = input.splitn(3, '|');
    let mut next_or = |stored: &str| parts.next().unwrap_or(stored).to_string();

    ProfileFields::new(
        next_or(&current.display_name),
        next_or(&current.email),
        next_or(&current.phone),
    )
}

fn game_settings(config: &GameConfig) -> GameSettings {
    GameSettings {
        duration_secs: config.duration_secs,
        collectibles: config.collectibles,
        arena_width: f64::from(config.arena_width),
        arena_height: f64::from(config.arena_height),
        step: f64::from(config.step),
        pickup_radius: config.pickup_radius,
    }
}

fn walls(config: &GameConfig) -> Vec<Rect> {
    config
        .walls
        .iter()
        .map(|wall| Rect::new(wall.x, wall.y, wall.width, wall.height))
        .collect()
}
