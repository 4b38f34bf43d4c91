//! verdant-sim — Scripted demonstration of the plant lifecycle.
//!
//! Runs a deterministic day-in-the-garden against an in-memory ledger on a
//! simulated clock: two participants seed plants, one waters diligently and
//! harvests at bloom, the other neglects theirs until it dies, and the
//! administrator sweeps the remaining balance. Prints the event log and a
//! final summary as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use verdant_core::config::GardenConfig;
use verdant_core::events::GardenEvent;
use verdant_core::traits::Ledger;
use verdant_core::types::{AccountId, Plant};
use verdant_garden::Garden;
use verdant_ledger::MemoryLedger;

/// Deterministic plant lifecycle demo on a simulated clock.
#[derive(Parser)]
#[command(name = "verdant-sim")]
#[command(version, about = "Tend, neglect, harvest: a scripted garden run.")]
struct Cli {
    /// Seconds per growth stage.
    #[arg(long, default_value_t = 60)]
    stage_duration: u64,

    /// Seconds per depletion step.
    #[arg(long, default_value_t = 30)]
    depletion_interval: u64,

    /// Resource lost per depletion step.
    #[arg(long, default_value_t = 2)]
    depletion_rate: u64,

    /// Entry price in dew.
    #[arg(long, default_value_t = 100)]
    entry_price: u64,

    /// Harvest reward in dew.
    #[arg(long, default_value_t = 150)]
    harvest_reward: u64,

    /// Pre-funded ledger balance in dew (the reward exceeds the entry
    /// price, so a lone harvest needs head room).
    #[arg(long, default_value_t = 500)]
    ledger_balance: u64,

    /// Pretty-print the JSON summary.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Summary {
    events: Vec<GardenEvent>,
    plants: Vec<Plant>,
    swept: u64,
    final_balance: u64,
}

fn account(name: &str) -> AccountId {
    let mut bytes = [0u8; 32];
    for (slot, byte) in bytes.iter_mut().zip(name.bytes()) {
        *slot = byte;
    }
    AccountId::from_bytes(bytes)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let admin = account("admin");
    let config = GardenConfig {
        entry_price: cli.entry_price,
        harvest_reward: cli.harvest_reward,
        stage_duration_secs: cli.stage_duration,
        depletion_interval_secs: cli.depletion_interval,
        depletion_rate: cli.depletion_rate,
        admin,
    };
    let mut garden = Garden::new(config, MemoryLedger::with_balance(cli.ledger_balance));

    let alice = account("alice");
    let bob = account("bob");
    let stage = cli.stage_duration;

    // Both participants seed at t=0.
    let rose = garden
        .seed(alice, cli.entry_price, 0)
        .context("seeding alice's rose")?;
    let fern = garden
        .seed(bob, cli.entry_price, 0)
        .context("seeding bob's fern")?;
    info!(%rose, %fern, "garden planted");

    // Alice waters once per stage; Bob never comes back.
    for round in 1..=3u64 {
        let now = stage.saturating_mul(round);
        garden
            .water(rose, alice, now)
            .with_context(|| format!("watering rose at t={now}"))?;
    }

    // Harvest at full bloom.
    let harvest_at = stage.saturating_mul(3).saturating_add(1);
    let reward = garden
        .harvest(rose, alice, harvest_at)
        .context("harvesting rose")?;
    info!(reward, "rose harvested");

    // Long enough for an unwatered fern to die, whatever the tuning.
    let far_future = harvest_at
        + cli
            .depletion_interval
            .saturating_mul(verdant_core::constants::FULL_RESOURCE as u64);
    garden
        .refresh(fern, far_future)
        .context("refreshing bob's fern")?;

    let swept = garden.sweep(admin).context("sweeping the ledger")?;

    let summary = Summary {
        events: garden.take_events(),
        plants: vec![
            garden.get_plant(rose, far_future)?,
            garden.get_plant(fern, far_future)?,
        ],
        swept,
        final_balance: garden.ledger().balance(),
    };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{rendered}");
    Ok(())
}
