mod code_entry;
mod login_machine;
mod login_state;

pub use code_entry::CodeEntry;
pub use login_machine::{LoginBoot, LoginMachine, SubmitOutcome};
pub use login_state::LoginState;

const WRONG_CODE_MESSAGE: &str = "Wrong code";
const LOGGED_IN_MESSAGE: &str = "Logged in";
const INCORRECT_MESSAGE: &str = "Incorrect";
const MASK_ENTERED: char = '●';
const MASK_EMPTY: char = '-';
