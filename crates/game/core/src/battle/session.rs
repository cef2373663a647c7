use super::action::{RangerAction, SkillEffect};
use super::error::BattleError;
use super::outcome::{BattleEvent, BattlePhase, BattleReport, BattleResult, TurnOutcome};
use crate::combat::{calculate_damage, percent_of, scale_attack};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::profile::RangerProfile;

/// One encounter between a ranger and an enemy.
///
/// The session borrows the ranger mutably for its whole lifetime; health and
/// mega energy changes land on the profile directly. Call
/// [`conclude`](Self::conclude) once the phase is terminal to release the
/// borrow and obtain the [`BattleReport`].
pub struct BattleSession<'a> {
    ranger: &'a mut RangerProfile,
    enemy: Enemy,
    phase: BattlePhase,
    turn: u32,
    enemy_actions: u32,
    fled: bool,
    log: Vec<BattleEvent>,
}

impl<'a> BattleSession<'a> {
    /// Start a battle. A combatant already at 0 HP ends it immediately.
    pub fn new(ranger: &'a mut RangerProfile, enemy: Enemy) -> Self {
        let phase = if !ranger.is_alive() {
            BattlePhase::Lost
        } else if !enemy.is_alive() {
            BattlePhase::Won
        } else {
            BattlePhase::RangerTurn
        };

        Self {
            ranger,
            enemy,
            phase,
            turn: 0,
            enemy_actions: 0,
            fled: false,
            log: Vec::new(),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn ranger(&self) -> &RangerProfile {
        self.ranger
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Number of turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &[BattleEvent] {
        &self.log
    }

    /// Result once the battle is over.
    pub fn result(&self) -> Option<BattleResult> {
        match self.phase {
            BattlePhase::Won => Some(BattleResult::Victory),
            BattlePhase::Lost if self.fled => Some(BattleResult::Fled),
            BattlePhase::Lost => Some(BattleResult::Defeat),
            BattlePhase::RangerTurn | BattlePhase::EnemyTurn => None,
        }
    }

    /// Check whether `action` can be taken right now without applying it.
    pub fn check_action(&self, action: RangerAction) -> Result<(), BattleError> {
        if self.phase.is_terminal() {
            return Err(BattleError::BattleOver { phase: self.phase });
        }

        match action {
            RangerAction::FusionPower => {
                if self.ranger.level < GameConfig::FUSION_MIN_LEVEL {
                    return Err(BattleError::out_of_range(
                        action.label(),
                        "requires level 3",
                    ));
                }
                if self.ranger.mega_energy < GameConfig::MAX_MEGA_ENERGY {
                    return Err(BattleError::out_of_range(
                        action.label(),
                        "mega energy meter is not full",
                    ));
                }
            }
            RangerAction::Skill(skill) => {
                if !skill.is_unlocked_at(self.ranger.level) {
                    return Err(BattleError::out_of_range(
                        action.label(),
                        "skill is not unlocked at this level",
                    ));
                }
                if self.ranger.mega_energy < skill.energy_cost() {
                    return Err(BattleError::out_of_range(
                        action.label(),
                        "not enough mega energy",
                    ));
                }
            }
            RangerAction::Attack | RangerAction::Defend | RangerAction::Flee => {}
        }

        Ok(())
    }

    /// Every action that [`check_action`](Self::check_action) accepts now.
    pub fn available_actions(&self) -> Vec<RangerAction> {
        let mut candidates = vec![RangerAction::Attack];
        candidates.extend(super::action::Skill::ALL.map(RangerAction::Skill));
        candidates.extend([
            RangerAction::FusionPower,
            RangerAction::Defend,
            RangerAction::Flee,
        ]);

        candidates
            .into_iter()
            .filter(|action| self.check_action(*action).is_ok())
            .collect()
    }

    /// Resolve one full turn: the ranger acts, then the enemy counterattacks
    /// if it survived and the ranger did not flee.
    ///
    /// Rejected actions return an error and leave all state unchanged.
    pub fn resolve_turn(&mut self, action: RangerAction) -> Result<TurnOutcome, BattleError> {
        self.check_action(action)?;

        self.turn += 1;
        let mut events = Vec::new();
        let mut guard_bonus = 0;

        match action {
            RangerAction::Attack => {
                let damage = calculate_damage(self.ranger.attack, self.enemy.defense);
                let enemy_health = self.enemy.take_damage(damage);
                self.ranger.gain_mega_energy(1);
                events.push(BattleEvent::RangerAttack {
                    damage,
                    enemy_health,
                });
            }
            RangerAction::Skill(skill) => {
                let energy_spent = skill.energy_cost();
                // cost already checked above
                self.ranger.spend_mega_energy(energy_spent);

                match skill.effect() {
                    SkillEffect::Strike {
                        numerator,
                        denominator,
                    } => {
                        let attack = scale_attack(self.ranger.attack, numerator, denominator);
                        let damage = calculate_damage(attack, self.enemy.defense);
                        self.enemy.take_damage(damage);
                        self.ranger.gain_mega_energy(1);
                        events.push(BattleEvent::SkillUsed {
                            skill,
                            energy_spent,
                            damage: Some(damage),
                            healed: 0,
                        });
                    }
                    SkillEffect::Heal { percent } => {
                        let healed = self
                            .ranger
                            .heal(percent_of(self.ranger.max_health, percent));
                        events.push(BattleEvent::SkillUsed {
                            skill,
                            energy_spent,
                            damage: None,
                            healed,
                        });
                    }
                }
            }
            RangerAction::FusionPower => {
                let damage = self
                    .ranger
                    .attack
                    .saturating_mul(GameConfig::FUSION_DAMAGE_MULTIPLIER);
                self.enemy.take_damage(damage);
                let healed = self.ranger.heal(percent_of(
                    self.ranger.max_health,
                    GameConfig::FUSION_HEAL_PERCENT,
                ));
                self.ranger.reset_mega_energy();
                events.push(BattleEvent::FusionPower { damage, healed });
            }
            RangerAction::Defend => {
                guard_bonus = GameConfig::DEFEND_BONUS;
                events.push(BattleEvent::Defended {
                    defense: self.ranger.defense.saturating_add(guard_bonus),
                });
            }
            RangerAction::Flee => {
                self.fled = true;
                events.push(BattleEvent::Fled);
                return Ok(self.finish_turn(events, BattlePhase::Lost));
            }
        }

        if !self.enemy.is_alive() {
            events.push(BattleEvent::EnemyDefeated);
            return Ok(self.finish_turn(events, BattlePhase::Won));
        }

        self.phase = BattlePhase::EnemyTurn;
        self.enemy_turn(guard_bonus, &mut events);

        if !self.ranger.is_alive() {
            events.push(BattleEvent::RangerDefeated);
            return Ok(self.finish_turn(events, BattlePhase::Lost));
        }

        Ok(self.finish_turn(events, BattlePhase::RangerTurn))
    }

    /// End a battle that is still in progress as a retreat.
    ///
    /// No turn is spent and the enemy gets no counterattack; the result is
    /// [`BattleResult::Fled`]. Fails once the battle is already over.
    pub fn forfeit(&mut self) -> Result<(), BattleError> {
        if self.phase.is_terminal() {
            return Err(BattleError::BattleOver { phase: self.phase });
        }
        self.fled = true;
        self.phase = BattlePhase::Lost;
        self.log.push(BattleEvent::Fled);
        Ok(())
    }

    /// End the session and release the ranger.
    pub fn conclude(self) -> Result<BattleReport, BattleError> {
        let Some(result) = self.result() else {
            return Err(BattleError::BattleInProgress { phase: self.phase });
        };

        Ok(BattleReport {
            enemy: self.enemy,
            result,
            turns: self.turn,
            log: self.log,
        })
    }

    fn enemy_turn(&mut self, guard_bonus: u32, events: &mut Vec<BattleEvent>) {
        self.enemy_actions += 1;
        let power_attack = self.enemy_actions % GameConfig::ENEMY_POWER_ATTACK_INTERVAL == 0;

        let attack = if power_attack {
            scale_attack(self.enemy.attack, 3, 2)
        } else {
            self.enemy.attack
        };
        let damage = calculate_damage(attack, self.ranger.defense.saturating_add(guard_bonus));
        self.ranger.take_damage(damage);

        events.push(BattleEvent::EnemyAttack {
            damage,
            power_attack,
            ranger_health: self.ranger.current_health,
        });
    }

    fn finish_turn(&mut self, events: Vec<BattleEvent>, phase: BattlePhase) -> TurnOutcome {
        self.phase = phase;
        self.log.extend(events.iter().cloned());

        TurnOutcome {
            turn: self.turn,
            events,
            phase,
            ranger_health: self.ranger.current_health,
            enemy_health: self.enemy.current_health,
            mega_energy: self.ranger.mega_energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Skill;
    use crate::enemy::{Difficulty, EnemyFactory, EnemyKind};
    use crate::profile::create_ranger;

    fn dummy(health: u32, attack: u32, defense: u32) -> Enemy {
        Enemy {
            name: "Training Dummy".into(),
            kind: EnemyKind::Loogies,
            level: 1,
            current_health: health,
            max_health: health,
            attack,
            defense,
            gold_reward: 25,
            experience: 20,
        }
    }

    #[test]
    fn starts_on_ranger_turn() {
        let mut ranger = create_ranger("Jason", "Red", "Tech").unwrap();
        let session = BattleSession::new(&mut ranger, dummy(30, 5, 5));

        assert_eq!(session.phase(), BattlePhase::RangerTurn);
        assert_eq!(session.turn(), 0);
        assert_eq!(session.result(), None);
    }

    #[test]
    fn attack_then_counterattack_returns_to_ranger_turn() {
        let mut ranger = create_ranger("Jason", "Red", "Tech").unwrap().with_mega_energy(0);
        let mut session = BattleSession::new(&mut ranger, dummy(100, 15, 5));

        let outcome = session.resolve_turn(RangerAction::Attack).unwrap();

        assert_eq!(outcome.phase, BattlePhase::RangerTurn);
        assert_eq!(
            outcome.events,
            vec![
                BattleEvent::RangerAttack {
                    damage: 20,
                    enemy_health: 80
                },
                BattleEvent::EnemyAttack {
                    damage: 5,
                    power_attack: false,
                    ranger_health: 105
                },
            ]
        );
        assert_eq!(outcome.mega_energy, 1);
    }

    #[test]
    fn killing_blow_skips_counterattack() {
        let mut ranger = create_ranger("Jason", "Red", "Tech").unwrap();
        let mut session = BattleSession::new(&mut ranger, dummy(10, 50, 0));

        let outcome = session.resolve_turn(RangerAction::Attack).unwrap();

        assert_eq!(outcome.phase, BattlePhase::Won);
        assert_eq!(outcome.damage_taken(), 0);
        assert_eq!(outcome.events.last(), Some(&BattleEvent::EnemyDefeated));
        assert_eq!(session.ranger().current_health, session.ranger().max_health);
    }

    #[test]
    fn ranger_at_zero_health_loses() {
        let mut ranger = create_ranger("Billy", "Blue", "Tech").unwrap();
        ranger.current_health = 3;
        let mut session = BattleSession::new(&mut ranger, dummy(500, 40, 0));

        let outcome = session.resolve_turn(RangerAction::Attack).unwrap();

        assert_eq!(outcome.phase, BattlePhase::Lost);
        assert_eq!(outcome.ranger_health, 0);
        assert_eq!(session.result(), Some(BattleResult::Defeat));
    }

    #[test]
    fn flee_ends_battle_without_counterattack() {
        let mut ranger = create_ranger("Zack", "Black", "Tech").unwrap();
        let mut session = BattleSession::new(&mut ranger, dummy(500, 40, 0));

        let outcome = session.resolve_turn(RangerAction::Flee).unwrap();

        assert_eq!(outcome.phase, BattlePhase::Lost);
        assert_eq!(outcome.events, vec![BattleEvent::Fled]);

        let report = session.conclude().unwrap();
        assert_eq!(report.result, BattleResult::Fled);
        assert_eq!(report.turns, 1);
    }

    #[test]
    fn acting_after_the_end_is_rejected() {
        let mut ranger = create_ranger("Zack", "Black", "Tech").unwrap();
        let mut session = BattleSession::new(&mut ranger, dummy(1, 1, 0));
        session.resolve_turn(RangerAction::Attack).unwrap();

        assert_eq!(
            session.resolve_turn(RangerAction::Attack),
            Err(BattleError::BattleOver {
                phase: BattlePhase::Won
            })
        );
    }

    #[test]
    fn conclude_requires_terminal_phase() {
        let mut ranger = create_ranger("Zack", "Black", "Tech").unwrap();
        let session = BattleSession::new(&mut ranger, dummy(100, 1, 0));

        assert!(matches!(
            session.conclude(),
            Err(BattleError::BattleInProgress { .. })
        ));
    }

    #[test]
    fn forfeit_ends_the_battle_as_fled() {
        let mut ranger = create_ranger("Zack", "Black", "Tech").unwrap();
        let mut session = BattleSession::new(&mut ranger, dummy(100, 5, 0));
        session.resolve_turn(RangerAction::Defend).unwrap();
        let health = session.ranger().current_health;

        session.forfeit().unwrap();

        assert_eq!(session.result(), Some(BattleResult::Fled));
        assert_eq!(session.ranger().current_health, health);
        assert_eq!(
            session.forfeit(),
            Err(BattleError::BattleOver {
                phase: BattlePhase::Lost
            })
        );

        let report = session.conclude().unwrap();
        assert_eq!(report.turns, 1);
        assert_eq!(report.log.last(), Some(&BattleEvent::Fled));
    }

    #[test]
    fn fusion_rejected_below_level_three() {
        let mut ranger = create_ranger("Kim", "Pink", "Magic").unwrap().with_level(2);
        let before = ranger.clone();
        let mut session = BattleSession::new(&mut ranger, dummy(100, 10, 5));

        let err = session.resolve_turn(RangerAction::FusionPower).unwrap_err();

        assert!(matches!(err, BattleError::OutOfRangeAction { .. }));
        assert_eq!(session.turn(), 0);
        assert_eq!(session.enemy().current_health, 100);
        assert_eq!(session.ranger(), &before);
    }

    #[test]
    fn fusion_rejected_without_full_meter() {
        let mut ranger = create_ranger("Kim", "Pink", "Magic")
            .unwrap()
            .with_level(5)
            .with_mega_energy(2);
        let mut session = BattleSession::new(&mut ranger, dummy(100, 10, 5));

        assert!(session.resolve_turn(RangerAction::FusionPower).is_err());
        assert_eq!(session.ranger().mega_energy, 2);
    }

    #[test]
    fn power_strike_spends_then_rebuilds_energy() {
        let mut ranger = create_ranger("Tommy", "Green", "Nature")
            .unwrap()
            .with_level(3)
            .with_mega_energy(1);
        let attack = ranger.attack;
        let mut session = BattleSession::new(&mut ranger, dummy(500, 1, 10));

        let outcome = session
            .resolve_turn(RangerAction::Skill(Skill::PowerStrike))
            .unwrap();

        assert_eq!(outcome.damage_dealt(), attack * 3 / 2 - 10);
        assert_eq!(outcome.mega_energy, 1);
    }

    #[test]
    fn locked_skill_is_rejected() {
        let mut ranger = create_ranger("Tommy", "Green", "Nature").unwrap().with_level(4);
        let mut session = BattleSession::new(&mut ranger, dummy(100, 1, 0));

        assert!(session.resolve_turn(RangerAction::Skill(Skill::MegaBlast)).is_err());
        assert_eq!(session.ranger().mega_energy, GameConfig::MAX_MEGA_ENERGY);
    }

    #[test]
    fn healing_light_heals_without_building_energy() {
        let mut ranger = create_ranger("Trini", "Yellow", "Nature")
            .unwrap()
            .with_level(7)
            .with_mega_energy(2);
        ranger.current_health = 10;
        let max = ranger.max_health;
        let mut session = BattleSession::new(&mut ranger, dummy(500, 1, 0));

        let outcome = session
            .resolve_turn(RangerAction::Skill(Skill::HealingLight))
            .unwrap();

        assert_eq!(outcome.mega_energy, 1);
        assert_eq!(
            outcome.events[0],
            BattleEvent::SkillUsed {
                skill: Skill::HealingLight,
                energy_spent: 1,
                damage: None,
                healed: max * 30 / 100,
            }
        );
    }

    #[test]
    fn defend_raises_defense_for_the_counterattack() {
        let mut ranger = create_ranger("Billy", "Blue", "Tech").unwrap();
        let defense = ranger.defense;
        let mut session = BattleSession::new(&mut ranger, dummy(500, defense + 5, 0));

        let outcome = session.resolve_turn(RangerAction::Defend).unwrap();

        assert_eq!(outcome.damage_taken(), 2);
        assert_eq!(outcome.damage_dealt(), 0);
    }

    #[test]
    fn every_third_enemy_action_is_a_power_attack() {
        let mut ranger = create_ranger("Billy", "Blue", "Tech").unwrap();
        let defense = ranger.defense;
        let mut session = BattleSession::new(&mut ranger, dummy(1_000, defense + 10, 1_000));

        let first = session.resolve_turn(RangerAction::Defend).unwrap();
        let second = session.resolve_turn(RangerAction::Defend).unwrap();
        let third = session.resolve_turn(RangerAction::Attack).unwrap();

        assert_eq!(first.damage_taken(), 7);
        assert_eq!(second.damage_taken(), 7);
        assert_eq!(third.damage_taken(), (defense + 10) * 3 / 2 - defense);
        assert!(matches!(
            third.events.last(),
            Some(BattleEvent::EnemyAttack {
                power_attack: true,
                ..
            })
        ));
    }

    #[test]
    fn available_actions_follow_eligibility() {
        let mut ranger = create_ranger("Tommy", "Green", "Nature").unwrap();
        let session = BattleSession::new(
            &mut ranger,
            EnemyFactory::spawn(EnemyKind::Loogies, Difficulty::Medium, 1),
        );

        assert_eq!(
            session.available_actions(),
            vec![RangerAction::Attack, RangerAction::Defend, RangerAction::Flee]
        );
    }
}
