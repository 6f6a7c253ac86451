/// Pages the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Hub,
    Game,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Hub => "hub",
            Self::Game => "game",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
