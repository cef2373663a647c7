//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use ranger_core::RangerProfile;

use crate::repository::{RepositoryError, Result, SaveFile, SaveRepository, SaveSlotInfo};

/// File-based implementation of SaveRepository.
///
/// # File Format
///
/// Each slot is stored as `save{slot}.json`, a pretty-printed [`SaveFile`].
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never clobbers the previous save.
///
/// Before a slot is overwritten its current file is copied to
/// `backups/save{slot}_backup_{timestamp}.json`; the newest
/// [`BACKUPS_KEPT`](Self::BACKUPS_KEPT) backups per slot are retained. A save
/// that fails to parse or validate on load is replaced by its latest backup.
pub struct FileSaveRepository {
    base_dir: PathBuf,
    backup_dir: PathBuf,
    max_slots: u8,
}

impl FileSaveRepository {
    pub const BACKUPS_KEPT: usize = 3;

    /// Fixed-width so backups sort chronologically by name.
    const BACKUP_TIMESTAMP_FORMAT: &'static str = "%Y%m%d_%H%M%S_%3f";

    /// Create a new file-based save repository, creating directories as needed.
    pub fn new(base_dir: impl AsRef<Path>, max_slots: u8) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let backup_dir = base_dir.join("backups");
        fs::create_dir_all(&backup_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            backup_dir,
            max_slots: max_slots.max(1),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a slot's save file.
    pub fn save_path(&self, slot: u8) -> PathBuf {
        self.base_dir.join(format!("save{}.json", slot))
    }

    /// Backups for a slot, newest first.
    pub fn backups(&self, slot: u8) -> Result<Vec<PathBuf>> {
        let prefix = format!("save{}_backup_", slot);
        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(RepositoryError::Io)? {
            let path = entry.map_err(RepositoryError::Io)?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && filename.starts_with(&prefix)
                && filename.ends_with(".json")
            {
                backups.push(path);
            }
        }

        backups.sort_unstable_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn backup(&self, slot: u8) -> Result<()> {
        let path = self.save_path(slot);
        if !path.exists() {
            return Ok(());
        }

        let backup_path = self.backup_dir.join(format!(
            "save{}_backup_{}.json",
            slot,
            Utc::now().format(Self::BACKUP_TIMESTAMP_FORMAT)
        ));
        fs::copy(&path, &backup_path).map_err(RepositoryError::Io)?;
        tracing::debug!("Backed up save[{}] to {}", slot, backup_path.display());

        for stale in self.backups(slot)?.into_iter().skip(Self::BACKUPS_KEPT) {
            fs::remove_file(&stale).map_err(RepositoryError::Io)?;
            tracing::debug!("Pruned backup {}", stale.display());
        }

        Ok(())
    }

    /// Parse and validate one save file.
    fn read_save(path: &Path) -> Result<SaveFile> {
        let text = fs::read_to_string(path).map_err(RepositoryError::Io)?;
        let save: SaveFile = serde_json::from_str(&text)?;
        save.character
            .validate()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Ok(save)
    }

    fn load_latest_backup(&self, slot: u8) -> Option<SaveFile> {
        let backups = self.backups(slot).ok()?;
        let latest = backups.first()?;

        match Self::read_save(latest) {
            Ok(save) => {
                tracing::warn!("Restored save[{}] from backup {}", slot, latest.display());
                Some(save)
            }
            Err(e) => {
                tracing::warn!("Backup {} is unusable: {}", latest.display(), e);
                None
            }
        }
    }
}

impl SaveRepository for FileSaveRepository {
    fn max_slots(&self) -> u8 {
        self.max_slots
    }

    fn save(&self, slot: u8, profile: &RangerProfile) -> Result<()> {
        self.check_slot(slot)?;
        let path = self.save_path(slot);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(&SaveFile::new(profile.clone()))?;

        self.backup(slot)?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to save[{}] at {}", profile.name, slot, path.display());

        Ok(())
    }

    fn load(&self, slot: u8) -> Result<Option<RangerProfile>> {
        self.check_slot(slot)?;
        let path = self.save_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        match Self::read_save(&path) {
            Ok(save) => {
                tracing::debug!("Loaded save[{}] from {}", slot, path.display());
                Ok(Some(save.character))
            }
            Err(e) => {
                tracing::warn!("Save[{}] failed to load: {}", slot, e);
                self.load_latest_backup(slot)
                    .map(|save| Some(save.character))
                    .ok_or_else(|| RepositoryError::Corrupted {
                        slot,
                        reason: e.to_string(),
                    })
            }
        }
    }

    fn exists(&self, slot: u8) -> bool {
        self.save_path(slot).exists()
    }

    fn delete(&self, slot: u8) -> Result<()> {
        self.check_slot(slot)?;
        let path = self.save_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted save[{}]", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<SaveSlotInfo>> {
        let mut slots = Vec::new();

        for slot in 1..=self.max_slots {
            let path = self.save_path(slot);
            if !path.exists() {
                continue;
            }
            match Self::read_save(&path) {
                Ok(save) => slots.push(save.info(slot)),
                Err(e) => tracing::debug!("Skipping unreadable save[{}]: {}", slot, e),
            }
        }

        Ok(slots)
    }
}
