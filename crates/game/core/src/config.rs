/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Highest level a ranger can reach. Experience keeps accumulating past
    /// the cap but no further level-ups are applied.
    pub max_level: u32,
    /// Gold granted to a freshly created ranger.
    pub starting_gold: u32,
}

impl GameConfig {
    // ===== ranger base stats (before color bonus) =====
    pub const BASE_HEALTH: u32 = 100;
    pub const BASE_ATTACK: u32 = 20;
    pub const BASE_DEFENSE: u32 = 10;

    // ===== per-level growth =====
    pub const HEALTH_PER_LEVEL: u32 = 5;
    pub const ATTACK_PER_LEVEL: u32 = 2;
    pub const DEFENSE_PER_LEVEL: u32 = 1;

    // ===== mega energy & fusion power =====
    pub const MAX_MEGA_ENERGY: u8 = 3;
    pub const FUSION_MIN_LEVEL: u32 = 3;
    pub const FUSION_DAMAGE_MULTIPLIER: u32 = 3;
    pub const FUSION_HEAL_PERCENT: u32 = 30;

    // ===== combat =====
    /// Floor applied to every attack that goes through defense.
    pub const MIN_DAMAGE: u32 = 1;
    /// Defense added for the counterattack that follows a Defend action.
    pub const DEFEND_BONUS: u32 = 3;
    /// Every N-th enemy action is a power attack.
    pub const ENEMY_POWER_ATTACK_INTERVAL: u32 = 3;

    // ===== progression =====
    /// Experience needed to leave level L is `XP_PER_LEVEL * L` (cumulative).
    pub const XP_PER_LEVEL: u32 = 100;
    pub const DEFEAT_GOLD_PERCENT: u32 = 10;
    pub const DEFEAT_GOLD_CAP: u32 = 50;
    pub const DEFEAT_RECOVERY_PERCENT: u32 = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LEVEL: u32 = 50;
    pub const DEFAULT_STARTING_GOLD: u32 = 100;
    /// Upper bound for a configured level cap and for any saved level.
    pub const LEVEL_CEILING: u32 = 100;

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
        }
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level.clamp(1, Self::LEVEL_CEILING);
        self
    }

    pub fn with_starting_gold(mut self, starting_gold: u32) -> Self {
        self.starting_gold = starting_gold;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
