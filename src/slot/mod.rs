pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use file::FileSlot;
pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;
pub use traits::DurableSlot;

use crate::config::SlotConfig;

/// Factory: create the right slot backend from config
pub fn create_slot(config: &SlotConfig) -> anyhow::Result<Box<dyn DurableSlot>> {
    match config.kind.as_str() {
        "memory" => Ok(Box::new(MemorySlot::new())),
        "file" => Ok(Box::new(FileSlot::new(&config.resolved_path())?)),
        "sqlite" => {
            let path = config.resolved_path();
            // A directory path gets a database file inside it
            let db_path = if path.extension().is_some() {
                path
            } else {
                path.join("session.db")
            };
            Ok(Box::new(SqliteSlot::new(&db_path)?))
        }
        other if other.trim().is_empty() => {
            anyhow::bail!("slot.kind cannot be empty. Supported values: memory, file, sqlite")
        }
        other => anyhow::bail!(
            "Unknown slot kind '{other}'. Supported values: memory, file, sqlite"
        ),
    }
}
