//! Error types for the Verdant simulation.
use thiserror::Error;

use crate::types::{AccountId, PlantId, Stage};

/// Failures of the external value-transfer capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds: have {have}, need {need}")] InsufficientFunds { have: u64, need: u64 },
    #[error("transfer rejected by recipient {0}")] TransferRejected(AccountId),
    #[error("balance overflow")] BalanceOverflow,
}

/// Precondition failures of the lifecycle operations.
///
/// Every variant aborts its transaction with zero side effects; the caller
/// must correct the condition and resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("insufficient payment: paid {paid}, entry price {required}")] InsufficientPayment { paid: u64, required: u64 },
    #[error("plant not found: {0}")] PlantNotFound(PlantId),
    #[error("caller {caller} does not own plant {plant}")] NotOwner { plant: PlantId, caller: AccountId },
    #[error("plant {0} is not alive")] NotAlive(PlantId),
    #[error("plant {plant} is not ready to harvest: stage {stage}")] StageNotReady { plant: PlantId, stage: Stage },
    #[error("caller {0} is not the administrator")] NotAdmin(AccountId),
    #[error(transparent)] Ledger(#[from] LedgerError),
}
