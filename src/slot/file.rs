//! File-backed slot: one JSON document per key inside a data directory.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::traits::DurableSlot;

pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Open a slot rooted at `dir`, creating the directory if needed.
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create slot directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            || key.starts_with('.')
        {
            bail!("Invalid slot key '{key}'");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DurableSlot for FileSlot {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Write then rename so a crash never leaves a half-written session.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to move session into {}", path.display()))?;
        tracing::debug!(key, path = %path.display(), "Slot value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let slot = FileSlot::new(tmp.path()).unwrap();
            slot.set("workperk_user", "{\"id\":\"x\"}").unwrap();
        }
        let slot = FileSlot::new(tmp.path()).unwrap();
        assert_eq!(
            slot.get("workperk_user").unwrap().as_deref(),
            Some("{\"id\":\"x\"}")
        );
        assert!(tmp.path().join("workperk_user.json").exists());
        assert!(!tmp.path().join("workperk_user.json.tmp").exists());
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path()).unwrap();
        slot.remove("nothing_here").unwrap();
        assert!(slot.get("nothing_here").unwrap().is_none());
    }

    #[test]
    fn creates_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        let slot = FileSlot::new(&dir).unwrap();
        slot.set("k", "v").unwrap();
        assert!(dir.join("k.json").is_file());
    }

    #[test]
    fn rejects_path_like_keys() {
        let tmp = TempDir::new().unwrap();
        let slot = FileSlot::new(tmp.path()).unwrap();
        assert!(slot.set("../escape", "v").is_err());
        assert!(slot.get("").is_err());
        assert!(slot.remove(".hidden").is_err());
    }
}
