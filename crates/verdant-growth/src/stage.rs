//! Growth stage as a pure step function of elapsed time since planting.
//!
//! Watering never advances or resets the stage; only elapsed time does.

use verdant_core::types::Stage;

/// Growth stage at `now` for a plant created at `planted_at`.
///
/// A step function of `elapsed = now - planted_at` against multiples of
/// `stage_duration`: `< 1×` Seed, `[1×, 2×)` Sprout, `[2×, 3×)` Growing,
/// `>= 3×` Blooming. Elapsed time saturates at 0 for a clock reading before
/// `planted_at`. A zero `stage_duration` means instant maturity.
pub fn compute_stage(planted_at: u64, now: u64, stage_duration: u64) -> Stage {
    if stage_duration == 0 {
        return Stage::Blooming;
    }
    let elapsed = now.saturating_sub(planted_at);
    match elapsed / stage_duration {
        0 => Stage::Seed,
        1 => Stage::Sprout,
        2 => Stage::Growing,
        _ => Stage::Blooming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DURATION: u64 = 60;

    #[test]
    fn stage_boundaries() {
        assert_eq!(compute_stage(0, 0, DURATION), Stage::Seed);
        assert_eq!(compute_stage(0, 59, DURATION), Stage::Seed);
        assert_eq!(compute_stage(0, 60, DURATION), Stage::Sprout);
        assert_eq!(compute_stage(0, 119, DURATION), Stage::Sprout);
        assert_eq!(compute_stage(0, 120, DURATION), Stage::Growing);
        assert_eq!(compute_stage(0, 179, DURATION), Stage::Growing);
        assert_eq!(compute_stage(0, 180, DURATION), Stage::Blooming);
        assert_eq!(compute_stage(0, u64::MAX, DURATION), Stage::Blooming);
    }

    #[test]
    fn offset_planting_time() {
        assert_eq!(compute_stage(1_000, 1_059, DURATION), Stage::Seed);
        assert_eq!(compute_stage(1_000, 1_180, DURATION), Stage::Blooming);
    }

    #[test]
    fn clock_before_planting_is_seed() {
        assert_eq!(compute_stage(1_000, 500, DURATION), Stage::Seed);
    }

    #[test]
    fn zero_duration_is_instant_bloom() {
        assert_eq!(compute_stage(1_000, 1_000, 0), Stage::Blooming);
    }

    proptest! {
        #[test]
        fn monotonic_in_elapsed(
            planted_at in 0u64..=1_000_000,
            a in 0u64..=2_000_000,
            b in 0u64..=2_000_000,
            duration in 1u64..=10_000,
        ) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let s_early = compute_stage(planted_at, early, duration);
            let s_late = compute_stage(planted_at, late, duration);
            prop_assert!(s_early <= s_late);
        }

        #[test]
        fn depends_only_on_elapsed(
            planted_at in 0u64..=1_000_000,
            elapsed in 0u64..=1_000_000,
            shift in 0u64..=1_000_000,
            duration in 1u64..=10_000,
        ) {
            let base = compute_stage(planted_at, planted_at + elapsed, duration);
            let shifted = compute_stage(planted_at + shift, planted_at + shift + elapsed, duration);
            prop_assert_eq!(base, shifted);
        }
    }
}
