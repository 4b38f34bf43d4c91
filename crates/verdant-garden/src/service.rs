//! Serialized public surface over the garden.
//!
//! [`GardenService`] wraps the manager in a `parking_lot::Mutex`: every
//! public operation runs as one serialized transaction, single writer, no
//! internal blocking beyond the lock. No operation suspends or cancels —
//! once entered it runs to completion (success or full rollback) in one
//! scheduling step.

use parking_lot::Mutex;

use verdant_core::error::GardenError;
use verdant_core::events::GardenEvent;
use verdant_core::traits::Ledger;
use verdant_core::types::{AccountId, Plant, PlantId};

use crate::manager::Garden;

/// Thread-safe handle serializing all garden transactions.
pub struct GardenService<L: Ledger> {
    inner: Mutex<Garden<L>>,
}

impl<L: Ledger> GardenService<L> {
    /// Wrap a garden for shared use.
    pub fn new(garden: Garden<L>) -> Self {
        Self {
            inner: Mutex::new(garden),
        }
    }

    /// See [`Garden::seed`].
    pub fn seed(&self, owner: AccountId, payment: u64, now: u64) -> Result<PlantId, GardenError> {
        self.inner.lock().seed(owner, payment, now)
    }

    /// See [`Garden::refresh`].
    pub fn refresh(&self, id: PlantId, now: u64) -> Result<(), GardenError> {
        self.inner.lock().refresh(id, now)
    }

    /// See [`Garden::water`].
    pub fn water(&self, id: PlantId, caller: AccountId, now: u64) -> Result<(), GardenError> {
        self.inner.lock().water(id, caller, now)
    }

    /// See [`Garden::harvest`].
    pub fn harvest(&self, id: PlantId, caller: AccountId, now: u64) -> Result<u64, GardenError> {
        self.inner.lock().harvest(id, caller, now)
    }

    /// See [`Garden::get_plant`].
    pub fn get_plant(&self, id: PlantId, now: u64) -> Result<Plant, GardenError> {
        self.inner.lock().get_plant(id, now)
    }

    /// See [`Garden::owner_plants`]. Returns an owned copy since the lock is
    /// released before returning.
    pub fn owner_plants(&self, owner: &AccountId) -> Vec<PlantId> {
        self.inner.lock().owner_plants(owner).to_vec()
    }

    /// See [`Garden::sweep`].
    pub fn sweep(&self, caller: AccountId) -> Result<u64, GardenError> {
        self.inner.lock().sweep(caller)
    }

    /// Current ledger balance.
    pub fn balance(&self) -> u64 {
        self.inner.lock().ledger().balance()
    }

    /// Drain the committed event log.
    pub fn take_events(&self) -> Vec<GardenEvent> {
        self.inner.lock().take_events()
    }
}
