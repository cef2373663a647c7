/// Enemy species available to the factory.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    /// Foot soldiers.
    Loogies,
    /// Flying swarmers.
    Zombats,
    /// Heavy tanks.
    Bruisers,
    /// Tactical robots.
    #[strum(serialize = "X-Borgs")]
    XBorgs,
    #[strum(serialize = "Metal Alice")]
    MetalAlice,
    #[strum(serialize = "Black Knight")]
    BlackKnight,
    #[strum(serialize = "Emperor Mavro")]
    EmperorMavro,
}

/// Unscaled stats and rewards for one enemy kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold_reward: u32,
    pub experience: u32,
}

impl EnemyTemplate {
    const fn new(
        health: u32,
        attack: u32,
        defense: u32,
        gold_reward: u32,
        experience: u32,
    ) -> Self {
        Self {
            health,
            attack,
            defense,
            gold_reward,
            experience,
        }
    }
}

impl EnemyKind {
    /// Kinds that random encounters draw from. Bosses are spawned explicitly.
    pub const REGULAR: [EnemyKind; 4] = [
        EnemyKind::Loogies,
        EnemyKind::Zombats,
        EnemyKind::Bruisers,
        EnemyKind::XBorgs,
    ];

    pub const fn is_boss(self) -> bool {
        matches!(
            self,
            Self::MetalAlice | Self::BlackKnight | Self::EmperorMavro
        )
    }

    pub const fn template(self) -> EnemyTemplate {
        match self {
            Self::Loogies => EnemyTemplate::new(30, 8, 5, 25, 20),
            Self::Zombats => EnemyTemplate::new(25, 10, 5, 25, 20),
            Self::Bruisers => EnemyTemplate::new(60, 15, 8, 25, 20),
            Self::XBorgs => EnemyTemplate::new(45, 14, 5, 25, 20),
            Self::MetalAlice => EnemyTemplate::new(200, 25, 5, 100, 75),
            Self::BlackKnight => EnemyTemplate::new(250, 30, 5, 100, 75),
            Self::EmperorMavro => EnemyTemplate::new(300, 35, 5, 100, 75),
        }
    }
}
