//! # verdant-ledger
//! In-memory implementation of the [`Ledger`](verdant_core::traits::Ledger)
//! capability.

pub mod memory;

pub use memory::MemoryLedger;
