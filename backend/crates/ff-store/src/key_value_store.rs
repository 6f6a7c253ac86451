/// Synchronous string key-value persistence.
///
/// Writes are atomic per key. Implementations absorb their own I/O failures so
/// that reads and writes always succeed from the caller's point of view.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    fn remove(&mut self, key: &str);

    /// Whether values outlive the current process.
    fn is_persistent(&self) -> bool;
}
