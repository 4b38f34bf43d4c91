//! Trait interfaces between the Verdant crates.
//!
//! These traits define the contracts between crates:
//! - [`GrowthModel`] — pure time-based resource/stage math (verdant-growth implements)
//! - [`Ledger`] — external shared-balance capability (verdant-ledger implements)

use crate::error::LedgerError;
use crate::types::{AccountId, Stage};

/// Pure computation of resource depletion and growth stage.
///
/// All methods are deterministic functions of their arguments and the
/// implementation's fixed tuning parameters: same inputs, same result, any
/// number of times. No wall clock, no side effects.
pub trait GrowthModel: Send + Sync {
    /// Resource level in [0, 100] after depletion between
    /// `last_refreshed_at` and `now`.
    ///
    /// Returns `level` unchanged when `now <= last_refreshed_at` (guards
    /// against a non-monotonic or equal clock reading). Never underflows;
    /// saturates at 0.
    fn resource_level(&self, level: u8, last_refreshed_at: u64, now: u64) -> u8;

    /// The boundary of the last depletion interval fully consumed by `now`.
    ///
    /// Persisting the level returned by
    /// [`resource_level`](Self::resource_level) together with this anchor
    /// neither drops nor double-counts decay across repeated refreshes.
    fn depletion_anchor(&self, last_refreshed_at: u64, now: u64) -> u64;

    /// Growth stage at `now` for a plant created at `planted_at`.
    ///
    /// Monotonic non-decreasing in `now`; independent of resource level and
    /// watering events.
    fn stage_at(&self, planted_at: u64, now: u64) -> Stage;
}

/// External shared-balance capability with atomic credit/debit.
///
/// The transfer primitive behind [`debit`](Self::debit) is all-or-nothing:
/// either the full amount moves and the call succeeds, or nothing moves and
/// an error is reported. The balance never goes below zero.
pub trait Ledger: Send + Sync {
    /// Current shared balance in dew.
    fn balance(&self) -> u64;

    /// Add `amount` to the shared balance.
    ///
    /// Succeeds short of `u64` overflow, which reports
    /// [`LedgerError::BalanceOverflow`] with the balance unchanged.
    fn credit(&mut self, amount: u64) -> Result<(), LedgerError>;

    /// Move `amount` from the shared balance to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientFunds`] if the balance cannot cover `amount`
    /// - [`LedgerError::TransferRejected`] if the external transfer primitive refuses
    ///
    /// On any error the balance is unchanged — no partial transfer.
    fn debit(&mut self, recipient: &AccountId, amount: u64) -> Result<(), LedgerError>;
}
