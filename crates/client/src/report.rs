//! Plain-text summaries printed to stdout.
use ranger_core::RangerProfile;
use ranger_runtime::{EncounterReport, EncounterRewards};

pub fn print_profile(profile: &RangerProfile) {
    println!(
        "{} the {} Ranger ({}) | level {} | XP {} | gold {} | HP {}/{} | ATK {} DEF {} | energy {}",
        profile.name,
        profile.color,
        profile.power_type,
        profile.level,
        profile.experience,
        profile.gold,
        profile.current_health,
        profile.max_health,
        profile.attack,
        profile.defense,
        profile.mega_energy
    );
}

pub fn print_encounter(report: &EncounterReport) {
    println!(
        "#{} {} (level {}): {} after {} turns",
        report.encounter + 1,
        report.enemy.name,
        report.enemy.level,
        report.result,
        report.turns
    );

    match &report.rewards {
        EncounterRewards::Victory(summary) => {
            println!(
                "   +{} XP, +{} gold ({} health bonus)",
                summary.experience, summary.gold, summary.bonus
            );
            for level_up in &summary.level_ups {
                print!(
                    "   LEVEL UP -> {} (HP {}, ATK {}, DEF {})",
                    level_up.level, level_up.max_health, level_up.attack, level_up.defense
                );
                match level_up.unlocked_skill {
                    Some(skill) => println!(", unlocked {}", skill),
                    None => println!(),
                }
            }
        }
        EncounterRewards::Defeat(summary) => {
            println!(
                "   lost {} gold, recovered to {} HP",
                summary.gold_lost, summary.restored_health
            );
        }
        EncounterRewards::Fled => println!("   escaped"),
    }
}
