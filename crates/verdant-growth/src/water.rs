//! Water resource depletion as a pure step function of elapsed time.
//!
//! The resource decays by `rate` per fully elapsed `interval` since the last
//! reset. All arithmetic is integer-only and saturating — the level never
//! underflows below 0 and never exceeds the value it started from.

/// Resource level after depletion between `last_refreshed_at` and `now`.
///
/// Returns `level` unchanged when `now <= last_refreshed_at`, guarding
/// against a non-monotonic or equal clock reading. A zero `interval` means
/// no depletion. Otherwise `level - floor(elapsed / interval) * rate`,
/// saturating at 0.
pub fn compute_resource(
    level: u8,
    last_refreshed_at: u64,
    now: u64,
    interval: u64,
    rate: u64,
) -> u8 {
    if now <= last_refreshed_at || interval == 0 {
        return level;
    }
    let intervals = (now - last_refreshed_at) / interval;
    let lost = intervals.saturating_mul(rate);
    // Result fits u8: it is bounded above by `level`.
    (u64::from(level)).saturating_sub(lost) as u8
}

/// The boundary of the last depletion interval fully consumed by `now`.
///
/// Persisting a recomputed level together with this anchor keeps decay
/// accounting exact across repeated refreshes: the partial interval beyond
/// the boundary is carried forward instead of being dropped or re-deducted.
pub fn advance_anchor(last_refreshed_at: u64, now: u64, interval: u64) -> u64 {
    if now <= last_refreshed_at || interval == 0 {
        return last_refreshed_at;
    }
    let intervals = (now - last_refreshed_at) / interval;
    // intervals * interval <= now - last_refreshed_at, so this cannot overflow.
    last_refreshed_at + intervals * interval
}
