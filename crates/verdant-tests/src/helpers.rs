//! Shared test helpers for the integration tests.

use verdant_core::config::GardenConfig;
use verdant_core::error::LedgerError;
use verdant_core::traits::Ledger;
use verdant_core::types::AccountId;
use verdant_garden::Garden;
use verdant_ledger::MemoryLedger;

/// Entry price used by every test garden.
pub const ENTRY: u64 = 100;
/// Harvest reward used by every test garden.
pub const REWARD: u64 = 150;

/// Simple account identity from a seed byte.
pub fn acct(seed: u8) -> AccountId {
    AccountId::from_bytes([seed; 32])
}

/// The administrator identity of every test garden.
pub fn admin() -> AccountId {
    acct(0xAD)
}

/// Fast tuning matching the scenario numbers: stage 60s, depletion every
/// 30s at rate 2, entry 100, reward 150.
pub fn test_config() -> GardenConfig {
    GardenConfig {
        entry_price: ENTRY,
        harvest_reward: REWARD,
        stage_duration_secs: 60,
        depletion_interval_secs: 30,
        depletion_rate: 2,
        admin: admin(),
    }
}

/// A fresh garden over an empty in-memory ledger.
pub fn new_garden() -> Garden<MemoryLedger> {
    Garden::new(test_config(), MemoryLedger::new())
}

/// A garden whose ledger can cover `harvests` rewards up front.
pub fn funded_garden(harvests: u64) -> Garden<MemoryLedger> {
    Garden::new(test_config(), MemoryLedger::with_balance(harvests * REWARD))
}

/// Ledger test double whose transfer primitive refuses every payout.
///
/// Credits work normally; `debit` passes the balance check and then reports
/// [`LedgerError::TransferRejected`] with nothing moved, exercising the
/// managers' rollback path.
#[derive(Debug, Default)]
pub struct RejectingLedger {
    inner: MemoryLedger,
}

impl RejectingLedger {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            inner: MemoryLedger::with_balance(balance),
        }
    }
}

impl Ledger for RejectingLedger {
    fn balance(&self) -> u64 {
        self.inner.balance()
    }

    fn credit(&mut self, amount: u64) -> Result<(), LedgerError> {
        self.inner.credit(amount)
    }

    fn debit(&mut self, recipient: &AccountId, amount: u64) -> Result<(), LedgerError> {
        let have = self.inner.balance();
        if have < amount {
            return Err(LedgerError::InsufficientFunds { have, need: amount });
        }
        Err(LedgerError::TransferRejected(*recipient))
    }
}
