use crate::CodeEntry;

/// `ProfileSelection -> CodeEntry -> Authenticated`; a failed submit stays in `CodeEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    ProfileSelection,
    CodeEntry(CodeEntry),
    Authenticated { user: String },
}

impl LoginState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileSelection => "profile_selection",
            Self::CodeEntry(_) => "code_entry",
            Self::Authenticated { .. } => "authenticated",
        }
    }
}
