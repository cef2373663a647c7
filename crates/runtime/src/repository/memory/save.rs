//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use ranger_core::RangerProfile;

use crate::repository::{RepositoryError, Result, SaveFile, SaveRepository, SaveSlotInfo};

/// In-memory implementation of SaveRepository.
///
/// Keeps one [`SaveFile`] per slot; nothing survives the process.
pub struct InMemorySaveRepository {
    max_slots: u8,
    saves: RwLock<BTreeMap<u8, SaveFile>>,
}

impl InMemorySaveRepository {
    /// Create an empty repository with the default slot count.
    pub fn new() -> Self {
        Self::with_slots(crate::RuntimeConfig::DEFAULT_SAVE_SLOTS)
    }

    pub fn with_slots(max_slots: u8) -> Self {
        Self {
            max_slots: max_slots.max(1),
            saves: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemorySaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn max_slots(&self) -> u8 {
        self.max_slots
    }

    fn save(&self, slot: u8, profile: &RangerProfile) -> Result<()> {
        self.check_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(slot, SaveFile::new(profile.clone()));
        Ok(())
    }

    fn load(&self, slot: u8) -> Result<Option<RangerProfile>> {
        self.check_slot(slot)?;
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(&slot).map(|save| save.character.clone()))
    }

    fn exists(&self, slot: u8) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(&slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: u8) -> Result<()> {
        self.check_slot(slot)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(&slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<SaveSlotInfo>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.iter().map(|(slot, save)| save.info(*slot)).collect())
    }
}
