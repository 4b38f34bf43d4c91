//! Growth engine implementing the [`GrowthModel`] trait.
//!
//! Packages the pure functions from [`water`](crate::water) and
//! [`stage`](crate::stage) with the tuning parameters fixed at construction.

use verdant_core::config::GardenConfig;
use verdant_core::traits::GrowthModel;
use verdant_core::types::Stage;

use crate::{stage, water};

/// The production growth model: step depletion plus time-stepped stages.
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    depletion_interval: u64,
    depletion_rate: u64,
    stage_duration: u64,
}

impl GrowthEngine {
    /// Create an engine with the tuning from `config`.
    pub fn new(config: &GardenConfig) -> Self {
        Self {
            depletion_interval: config.depletion_interval_secs,
            depletion_rate: config.depletion_rate,
            stage_duration: config.stage_duration_secs,
        }
    }
}

impl GrowthModel for GrowthEngine {
    fn resource_level(&self, level: u8, last_refreshed_at: u64, now: u64) -> u8 {
        water::compute_resource(
            level,
            last_refreshed_at,
            now,
            self.depletion_interval,
            self.depletion_rate,
        )
    }

    fn depletion_anchor(&self, last_refreshed_at: u64, now: u64) -> u64 {
        water::advance_anchor(last_refreshed_at, now, self.depletion_interval)
    }

    fn stage_at(&self, planted_at: u64, now: u64) -> Stage {
        stage::compute_stage(planted_at, now, self.stage_duration)
    }
}
