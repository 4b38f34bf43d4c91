//! In-memory shared-balance ledger.
//!
//! Stands in for the external value-transfer capability: a running balance
//! plus a per-account record of completed payouts, so tests can observe the
//! outbound half of a debit. No persistence, no partial transfers.

use std::collections::HashMap;

use verdant_core::error::LedgerError;
use verdant_core::traits::Ledger;
use verdant_core::types::AccountId;

/// In-memory [`Ledger`] with payout recording.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    /// Running shared balance in dew.
    balance: u64,
    /// Total dew ever paid out, per recipient.
    payouts: HashMap<AccountId, u64>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-funded with `balance` dew.
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            payouts: HashMap::new(),
        }
    }

    /// Total dew ever debited to `recipient`.
    pub fn payout_total(&self, recipient: &AccountId) -> u64 {
        self.payouts.get(recipient).copied().unwrap_or(0)
    }
}

impl Ledger for MemoryLedger {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn credit(&mut self, amount: u64) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    fn debit(&mut self, recipient: &AccountId, amount: u64) -> Result<(), LedgerError> {
        let have = self.balance;
        if have < amount {
            return Err(LedgerError::InsufficientFunds { have, need: amount });
        }
        // Stage the payout record before touching the balance so a failure
        // here leaves the ledger untouched.
        let total = self
            .payout_total(recipient)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balance = have - amount;
        self.payouts.insert(*recipient, total);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn acct(seed: u8) -> AccountId {
        AccountId::from_bytes([seed; 32])
    }

    #[test]
    fn credit_then_debit() {
        let mut ledger = MemoryLedger::new();
        ledger.credit(100).unwrap();
        ledger.credit(50).unwrap();
        assert_eq!(ledger.balance(), 150);

        ledger.debit(&acct(1), 120).unwrap();
        assert_eq!(ledger.balance(), 30);
        assert_eq!(ledger.payout_total(&acct(1)), 120);
        assert_eq!(ledger.payout_total(&acct(2)), 0);
    }

    #[test]
    fn debit_never_overdraws() {
        let mut ledger = MemoryLedger::with_balance(99);
        let err = ledger.debit(&acct(1), 100).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds { have: 99, need: 100 });
        // Nothing moved.
        assert_eq!(ledger.balance(), 99);
        assert_eq!(ledger.payout_total(&acct(1)), 0);
    }

    #[test]
    fn debit_exact_balance_drains() {
        let mut ledger = MemoryLedger::with_balance(75);
        ledger.debit(&acct(3), 75).unwrap();
        assert_eq!(ledger.balance(), 0);
        assert_eq!(ledger.payout_total(&acct(3)), 75);
    }

    #[test]
    fn credit_overflow_rejected() {
        let mut ledger = MemoryLedger::with_balance(u64::MAX);
        assert_eq!(ledger.credit(1), Err(LedgerError::BalanceOverflow));
        assert_eq!(ledger.balance(), u64::MAX);
    }

    #[test]
    fn zero_debit_succeeds() {
        let mut ledger = MemoryLedger::new();
        ledger.debit(&acct(1), 0).unwrap();
        assert_eq!(ledger.balance(), 0);
    }

    proptest! {
        #[test]
        fn balance_conserved(
            credits in proptest::collection::vec(0u64..=1_000_000, 0..20),
            debits in proptest::collection::vec(0u64..=1_000_000, 0..20),
        ) {
            let mut ledger = MemoryLedger::new();
            let mut expected: u64 = 0;
            for amount in credits {
                ledger.credit(amount).unwrap();
                expected += amount;
            }
            let recipient = acct(1);
            let mut paid: u64 = 0;
            for amount in debits {
                match ledger.debit(&recipient, amount) {
                    Ok(()) => {
                        expected -= amount;
                        paid += amount;
                    }
                    Err(LedgerError::InsufficientFunds { have, need }) => {
                        prop_assert!(need > have);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }
            prop_assert_eq!(ledger.balance(), expected);
            prop_assert_eq!(ledger.payout_total(&recipient), paid);
        }
    }
}
