/// A durable key-value slot that outlives the process.
///
/// Implementations only need string values; the session store owns
/// serialization.
pub trait DurableSlot: Send + Sync {
    /// Backend name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Read the value under `key`, `None` when nothing is stored.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}
