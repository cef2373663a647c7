//! On-disk save record and slot summary.

use chrono::{DateTime, Utc};
use ranger_core::{RangerColor, RangerProfile};
use serde::{Deserialize, Serialize};

/// A save slot's contents: the profile plus metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub save_timestamp: DateTime<Utc>,
    pub game_version: String,
    pub character: RangerProfile,
}

impl SaveFile {
    pub const GAME_VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Wrap a profile, stamped with the current time and crate version.
    pub fn new(character: RangerProfile) -> Self {
        Self {
            save_timestamp: Utc::now(),
            game_version: Self::GAME_VERSION.to_string(),
            character,
        }
    }

    pub fn info(&self, slot: u8) -> SaveSlotInfo {
        SaveSlotInfo {
            slot,
            name: self.character.name.clone(),
            color: self.character.color,
            level: self.character.level,
            saved_at: self.save_timestamp,
        }
    }
}

/// Summary of an occupied slot, for load menus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub name: String,
    pub color: RangerColor,
    pub level: u32,
    pub saved_at: DateTime<Utc>,
}
