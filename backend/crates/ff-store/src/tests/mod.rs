
use crate::SessionStore;

use ff_core::Roster;

pub(crate) fn memory_session() -> SessionStore {
    SessionStore::in_memory(Roster::household())
}
