//! Repository contract for persisting ranger profiles.

use ranger_core::RangerProfile;

use super::error::{RepositoryError, Result};
use super::types::SaveSlotInfo;

/// Repository for ranger profile persistence, indexed by save slot.
///
/// Slots are numbered from 1 to [`max_slots`](Self::max_slots). Every method
/// rejects slots outside that range with [`RepositoryError::InvalidSlot`].
pub trait SaveRepository: Send + Sync {
    /// Number of usable slots.
    fn max_slots(&self) -> u8;

    /// Save a profile into a slot, replacing what was there.
    fn save(&self, slot: u8, profile: &RangerProfile) -> Result<()>;

    /// Load the profile stored in a slot, or `None` if the slot is empty.
    fn load(&self, slot: u8) -> Result<Option<RangerProfile>>;

    /// Check if a slot holds a save.
    fn exists(&self, slot: u8) -> bool;

    /// Delete a save. Deleting an empty slot is not an error.
    fn delete(&self, slot: u8) -> Result<()>;

    /// Describe every occupied slot, in slot order.
    fn list_slots(&self) -> Result<Vec<SaveSlotInfo>>;

    /// Validate a slot number against [`max_slots`](Self::max_slots).
    fn check_slot(&self, slot: u8) -> Result<()> {
        let max = self.max_slots();
        if slot == 0 || slot > max {
            return Err(RepositoryError::InvalidSlot { slot, max });
        }
        Ok(())
    }
}
