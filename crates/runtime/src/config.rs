//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use ranger_core::{Difficulty, GameConfig};

/// Settings for a [`Runtime`](crate::Runtime) session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Directory holding `save{slot}.json` files and their backups.
    pub save_dir: PathBuf,
    pub save_slots: u8,
    /// Slot written after every encounter, if any.
    pub autosave_slot: Option<u8>,
    /// Base seed for enemy selection and reward rolls. Random when unset.
    pub game_seed: Option<u64>,
    pub difficulty: Difficulty,
    /// Encounters the headless driver runs per session.
    pub encounters: u32,
    /// Turns after which a battle ends as a retreat.
    pub max_turns: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_SAVE_SLOTS: u8 = 5;
    pub const DEFAULT_ENCOUNTERS: u32 = 3;
    pub const DEFAULT_MAX_TURNS: u32 = 500;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RANGER_SAVE_DIR` - Directory for save data (default: platform-specific)
    /// - `RANGER_SAVE_SLOTS` - Number of save slots (default: 5)
    /// - `RANGER_AUTOSAVE_SLOT` - Slot to autosave into after each encounter (default: none)
    /// - `RANGER_GAME_SEED` - Base RNG seed (default: random)
    /// - `RANGER_DIFFICULTY` - Easy, Medium, Hard or Extreme (default: Medium)
    /// - `RANGER_ENCOUNTERS` - Encounters per session (default: 3)
    /// - `RANGER_MAX_TURNS` - Turn limit per battle (default: 500)
    /// - `RANGER_MAX_LEVEL` - Level cap (default: 50, at most 100)
    /// - `RANGER_STARTING_GOLD` - Gold for a newly created ranger (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("RANGER_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(slots) = read_env::<u8>("RANGER_SAVE_SLOTS") {
            config.save_slots = slots.max(1);
        }

        config.autosave_slot = read_env::<u8>("RANGER_AUTOSAVE_SLOT").filter(|slot| *slot > 0);
        config.game_seed = read_env::<u64>("RANGER_GAME_SEED");

        if let Some(difficulty) = read_env::<Difficulty>("RANGER_DIFFICULTY") {
            config.difficulty = difficulty;
        }

        if let Some(encounters) = read_env::<u32>("RANGER_ENCOUNTERS") {
            config.encounters = encounters;
        }

        if let Some(max_turns) = read_env::<u32>("RANGER_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }

        if let Some(max_level) = read_env::<u32>("RANGER_MAX_LEVEL") {
            config.game_config = config.game_config.with_max_level(max_level);
        }

        if let Some(gold) = read_env::<u32>("RANGER_STARTING_GOLD") {
            config.game_config = config.game_config.with_starting_gold(gold);
        }

        config
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    pub fn with_game_seed(mut self, seed: u64) -> Self {
        self.game_seed = Some(seed);
        self
    }

    pub fn with_autosave_slot(mut self, slot: u8) -> Self {
        self.autosave_slot = Some(slot);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            save_dir: default_save_dir(),
            save_slots: Self::DEFAULT_SAVE_SLOTS,
            autosave_slot: None,
            game_seed: None,
            difficulty: Difficulty::default(),
            encounters: Self::DEFAULT_ENCOUNTERS,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }
}

/// Get the platform-specific save directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/ranger/saves`
/// - Linux: `~/.local/share/ranger/saves` (or `$XDG_DATA_HOME/ranger/saves`)
/// - Windows: `%APPDATA%\ranger\data\saves`
/// - Fallback: `./saves`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "ranger")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./saves"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
