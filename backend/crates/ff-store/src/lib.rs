pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;
pub mod session_store;
pub mod storage_key;

pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use session_store::SessionStore;
pub use storage_key::StorageKey;

use std::path::Path;

use log::warn;

/// Opens the durable file store, or a volatile in-memory store if the
/// storage directory cannot be used.
///
/// Callers never see a failure: with the fallback, values survive only until
/// the process exits.
pub fn open_with_fallback(dir: &Path, file_name: &str) -> Box<dyn KeyValueStore> {
    match FileStore::open(dir, file_name) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Storage unavailable, falling back to memory: {e}");
            warn!("{}", e.recovery_hint());
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests;
