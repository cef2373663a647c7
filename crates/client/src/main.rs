//! Ranger simulation headless driver.
//!
//! Creates (or resumes) a ranger, runs a batch of auto-piloted encounters and
//! prints what happened. Everything is configured through the environment;
//! see [`RuntimeConfig::from_env`] and [`ClientConfig::from_env`].
//!
//! ```bash
//! RANGER_COLOR=green RANGER_ENCOUNTERS=10 RUST_LOG=debug cargo run -p ranger-client
//! ```
mod config;
mod report;

use anyhow::{Context, Result};
use config::ClientConfig;
use ranger_core::create_ranger_with;
use ranger_runtime::{AutoPilotProvider, Runtime, RuntimeConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let client_config = ClientConfig::from_env();

    tracing::info!("Save directory: {}", runtime_config.save_dir.display());
    tracing::info!("Difficulty: {}", runtime_config.difficulty);

    // 2. Build the ranger and runtime
    let profile = create_ranger_with(
        &client_config.name,
        &client_config.color,
        &client_config.power_type,
        &runtime_config.game_config,
    )
    .context("invalid ranger selection")?;

    let difficulty = runtime_config.difficulty;
    let encounters = runtime_config.encounters;
    let mut runtime = Runtime::builder()
        .config(runtime_config)
        .profile(profile)
        .build()
        .context("failed to build runtime")?;

    // 3. Resume a saved ranger if asked to
    if let Some(slot) = client_config.load_slot
        && runtime.repository().exists(slot)
    {
        runtime
            .load(slot)
            .with_context(|| format!("failed to load slot {}", slot))?;
    }

    report::print_profile(runtime.profile());

    // 4. Fight
    let mut pilot = AutoPilotProvider::new();
    for _ in 0..encounters {
        let encounter = runtime.run_encounter(difficulty, &mut pilot)?;
        report::print_encounter(&encounter);
    }

    // 5. Persist
    if let Some(slot) = client_config.save_slot {
        runtime
            .save(slot)
            .with_context(|| format!("failed to save slot {}", slot))?;
    }

    report::print_profile(runtime.profile());
    println!(
        "Victories: {} of {} battles",
        runtime.profile().victories(),
        runtime.profile().battle_history.len()
    );

    Ok(())
}
