//! Encounter orchestration.
//!
//! [`Runtime`] owns the active ranger profile and drives encounters end to
//! end: spawn an enemy, ask an [`ActionProvider`] for each turn, apply the
//! post-battle rules, record the battle and autosave.
use ranger_core::{
    BattleEvent, BattleRecord, BattleResult, BattleSession, DefeatSummary,
    Difficulty, Enemy, EnemyFactory, GameError, PcgRng, RangerAction, RangerProfile,
    RewardSummary, RngOracle, apply_defeat, apply_victory, compute_seed,
};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::repository::{FileSaveRepository, SaveRepository, SaveSlotInfo};

/// Seed context for choosing which enemy appears.
const SPAWN_CONTEXT: u32 = 0;
/// Seed context for the victory gold roll.
const REWARD_CONTEXT: u32 = 1;

/// What the post-battle rules did to the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncounterRewards {
    Victory(RewardSummary),
    Defeat(DefeatSummary),
    /// Fleeing has no rewards and no penalty.
    Fled,
}

/// Everything that happened in one encounter.
#[derive(Clone, Debug)]
pub struct EncounterReport {
    /// Encounter sequence number within this runtime.
    pub encounter: u64,
    pub enemy: Enemy,
    pub result: BattleResult,
    pub turns: u32,
    pub log: Vec<BattleEvent>,
    pub rewards: EncounterRewards,
    /// Provider actions the battle rejected and replaced with a basic attack.
    pub rejected_actions: u32,
    /// Whether the profile was written to the autosave slot.
    pub autosaved: bool,
}

/// Main runtime that orchestrates encounters for one ranger.
///
/// Design: the runtime is the single owner of the profile. Battles borrow it
/// for their duration and persistence only ever reads it, so a failed save or
/// load never leaves it half-updated.
pub struct Runtime {
    config: RuntimeConfig,
    profile: RangerProfile,
    repository: Box<dyn SaveRepository>,
    rng: Box<dyn RngOracle>,
    game_seed: u64,
    nonce: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn profile(&self) -> &RangerProfile {
        &self.profile
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Number of encounters started so far.
    pub fn encounters(&self) -> u64 {
        self.nonce
    }

    pub fn repository(&self) -> &dyn SaveRepository {
        self.repository.as_ref()
    }

    /// Release the profile, e.g. to hand it to another runtime.
    pub fn into_profile(self) -> RangerProfile {
        self.profile
    }

    /// Fight a random regular enemy scaled to the ranger's level.
    pub fn run_encounter(
        &mut self,
        difficulty: Difficulty,
        provider: &mut impl ActionProvider,
    ) -> Result<EncounterReport> {
        let seed = compute_seed(self.game_seed, self.nonce, SPAWN_CONTEXT);
        let enemy =
            EnemyFactory::spawn_random(difficulty, self.profile.level, self.rng.as_ref(), seed);
        self.run_encounter_against(enemy, provider)
    }

    /// Fight a specific enemy, such as a boss.
    ///
    /// A battle that reaches `max_turns` ends as a retreat and is recorded as
    /// [`BattleResult::Fled`]. A failing provider also forces a retreat; the
    /// retreat is recorded and autosaved before the provider error is returned.
    pub fn run_encounter_against(
        &mut self,
        enemy: Enemy,
        provider: &mut impl ActionProvider,
    ) -> Result<EncounterReport> {
        let encounter = self.nonce;
        self.nonce += 1;

        tracing::info!(
            "Encounter {} begins: {} (level {}) vs {} (level {})",
            encounter,
            self.profile.name,
            self.profile.level,
            enemy.name,
            enemy.level
        );

        let max_turns = self.config.max_turns;
        let mut rejected_actions = 0;
        let mut session = BattleSession::new(&mut self.profile, enemy);

        let mut provider_error = None;

        while !session.is_over() {
            if session.turn() >= max_turns {
                tracing::warn!(
                    "Battle against {} hit the {} turn limit; retreating",
                    session.enemy().name,
                    max_turns
                );
                session.forfeit()?;
                break;
            }

            let action = match provider.provide_action(&session) {
                Ok(action) => action,
                Err(err) => {
                    tracing::warn!("Action provider failed: {}; retreating", err);
                    session.forfeit()?;
                    provider_error = Some(err);
                    break;
                }
            };
            let outcome = match session.resolve_turn(action) {
                Ok(outcome) => outcome,
                Err(err) if err.severity().is_recoverable() => {
                    tracing::debug!("Rejected action: {}; attacking instead", err);
                    rejected_actions += 1;
                    session.resolve_turn(RangerAction::Attack)?
                }
                Err(err) => return Err(err.into()),
            };

            tracing::debug!(
                "Turn {}: dealt {}, took {}, ranger {} HP, enemy {} HP, energy {}",
                outcome.turn,
                outcome.damage_dealt(),
                outcome.damage_taken(),
                outcome.ranger_health,
                outcome.enemy_health,
                outcome.mega_energy
            );
        }

        let report = session.conclude()?;
        let mut record = BattleRecord::new(report.enemy.name.clone(), report.result, report.turns);

        let rewards = match report.result {
            BattleResult::Victory => {
                let seed = compute_seed(self.game_seed, encounter, REWARD_CONTEXT);
                let summary = apply_victory(
                    &mut self.profile,
                    &report.enemy,
                    &self.config.game_config,
                    self.rng.as_ref(),
                    seed,
                );
                record = record.with_rewards(summary.gold, summary.experience);
                for level_up in &summary.level_ups {
                    tracing::info!("{} reached level {}", self.profile.name, level_up.level);
                }
                EncounterRewards::Victory(summary)
            }
            BattleResult::Defeat => {
                let summary = apply_defeat(&mut self.profile);
                record = record.with_gold_lost(summary.gold_lost);
                EncounterRewards::Defeat(summary)
            }
            BattleResult::Fled => EncounterRewards::Fled,
        };
        self.profile.record_battle(record);

        tracing::info!(
            "Encounter {} ended: {} against {} in {} turns",
            encounter,
            report.result,
            report.enemy.name,
            report.turns
        );

        let autosaved = self.autosave();

        if let Some(err) = provider_error {
            return Err(err);
        }

        Ok(EncounterReport {
            encounter,
            enemy: report.enemy,
            result: report.result,
            turns: report.turns,
            log: report.log,
            rewards,
            rejected_actions,
            autosaved,
        })
    }

    /// Save the current profile into a slot.
    pub fn save(&self, slot: u8) -> Result<()> {
        self.repository.save(slot, &self.profile)?;
        tracing::info!("Saved {} to slot {}", self.profile.name, slot);
        Ok(())
    }

    /// Replace the current profile with the one stored in `slot`.
    ///
    /// The in-memory profile is only replaced once the load has succeeded.
    pub fn load(&mut self, slot: u8) -> Result<&RangerProfile> {
        let profile = self
            .repository
            .load(slot)?
            .ok_or(RuntimeError::EmptySlot { slot })?;

        tracing::info!(
            "Loaded {} (level {}) from slot {}",
            profile.name,
            profile.level,
            slot
        );
        self.profile = profile;
        Ok(&self.profile)
    }

    pub fn list_saves(&self) -> Result<Vec<SaveSlotInfo>> {
        Ok(self.repository.list_slots()?)
    }

    fn autosave(&self) -> bool {
        let Some(slot) = self.config.autosave_slot else {
            return false;
        };

        match self.repository.save(slot, &self.profile) {
            Ok(()) => {
                tracing::debug!("Autosaved to slot {}", slot);
                true
            }
            Err(e) => {
                tracing::warn!("Autosave to slot {} failed: {}", slot, e);
                false
            }
        }
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    profile: Option<RangerProfile>,
    repository: Option<Box<dyn SaveRepository>>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            profile: None,
            repository: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the ranger to play (required)
    pub fn profile(mut self, profile: RangerProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set the save repository. Defaults to files under `config.save_dir`.
    pub fn repository(mut self, repository: impl SaveRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set the RNG oracle. Defaults to [`PcgRng`].
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let profile = self.profile.ok_or(RuntimeError::MissingProfile)?;
        profile.validate()?;

        let repository = match self.repository {
            Some(repository) => repository,
            None => Box::new(FileSaveRepository::new(
                &self.config.save_dir,
                self.config.save_slots,
            )?),
        };

        let game_seed = self.config.game_seed.unwrap_or_else(rand::random);
        tracing::debug!("Runtime seeded with {}", game_seed);

        Ok(Runtime {
            config: self.config,
            profile,
            repository,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            game_seed,
            nonce: 0,
        })
    }
}
