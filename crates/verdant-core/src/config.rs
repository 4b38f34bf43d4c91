//! Garden configuration.
//!
//! Provides [`GardenConfig`] with defaults drawn from
//! [`constants`](crate::constants). All knobs are fixed at garden
//! initialization; in particular the administrator identity is a
//! configuration value, not mutable authority state.

use crate::constants::{
    DEPLETION_INTERVAL_SECS, DEPLETION_RATE, ENTRY_PRICE, HARVEST_REWARD, STAGE_DURATION_SECS,
};
use crate::types::AccountId;

/// Tuning parameters for one garden instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenConfig {
    /// Minimum payment to seed a plant, in dew.
    pub entry_price: u64,
    /// Fixed harvest payout, in dew.
    pub harvest_reward: u64,
    /// Seconds per growth stage; blooming at three times this.
    pub stage_duration_secs: u64,
    /// Seconds per depletion step.
    pub depletion_interval_secs: u64,
    /// Resource lost per fully elapsed depletion interval.
    pub depletion_rate: u64,
    /// The only identity allowed to sweep the ledger balance.
    pub admin: AccountId,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            entry_price: ENTRY_PRICE,
            harvest_reward: HARVEST_REWARD,
            stage_duration_secs: STAGE_DURATION_SECS,
            depletion_interval_secs: DEPLETION_INTERVAL_SECS,
            depletion_rate: DEPLETION_RATE,
            admin: AccountId::default(),
        }
    }
}

impl GardenConfig {
    /// Default tuning with the given administrator.
    pub fn with_admin(admin: AccountId) -> Self {
        Self {
            admin,
            ..Self::default()
        }
    }
}
