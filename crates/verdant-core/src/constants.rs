//! Tuning defaults. All monetary values in dew (1 BLOOM = 10^6 dew).
//!
//! These are illustrative defaults; every one of them can be overridden per
//! garden through [`GardenConfig`](crate::config::GardenConfig).

pub const BLOOM: u64 = 1_000_000;

/// Payment required to seed a new plant.
pub const ENTRY_PRICE: u64 = 10 * BLOOM;

/// Fixed payout for harvesting a blooming plant.
///
/// Deliberately larger than [`ENTRY_PRICE`]: aggregate solvency depends on
/// new entries outpacing harvests, an economic property enforced per call
/// only through the ledger balance check.
pub const HARVEST_REWARD: u64 = 25 * BLOOM;

/// Resource level of a freshly seeded or freshly watered plant.
pub const FULL_RESOURCE: u8 = 100;

/// Seconds per growth stage. A plant blooms after three stage durations.
pub const STAGE_DURATION_SECS: u64 = 86_400;

/// Seconds per depletion step.
pub const DEPLETION_INTERVAL_SECS: u64 = 3_600;

/// Resource lost per fully elapsed depletion interval.
pub const DEPLETION_RATE: u64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_exceeds_entry_price() {
        assert!(HARVEST_REWARD > ENTRY_PRICE);
    }

    #[test]
    fn default_plant_needs_watering_to_bloom() {
        // time to die = (100 / rate) intervals, time to bloom = 3 durations.
        let secs_to_die = (FULL_RESOURCE as u64 / DEPLETION_RATE) * DEPLETION_INTERVAL_SECS;
        // Dies in 50 hours, blooms in 72: at least one watering is required.
        assert!(secs_to_die < 3 * STAGE_DURATION_SECS);
        assert_eq!(secs_to_die, 50 * 3_600);
    }
}
