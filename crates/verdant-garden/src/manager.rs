//! The lifecycle manager.
//!
//! [`Garden`] orchestrates every public operation as one atomic transaction:
//! read the current record, refresh resource and stage through the pure
//! growth model at the caller-supplied `now`, apply the operation's own
//! effect, and move value through the ledger. All writes are staged on a
//! cloned record plus a pending event list and committed only after the last
//! fallible step, so a failing precondition leaves the registry, the ledger,
//! and the event log exactly as they were.
//!
//! Liveness gates recompute the resource level from the pure model right
//! before the check instead of trusting only the persisted `alive` flag, so
//! a plant whose computed resource already reached zero can be neither
//! revived by watering nor harvested; only `refresh` persists death.

use tracing::{debug, info};

use verdant_core::config::GardenConfig;
use verdant_core::constants::FULL_RESOURCE;
use verdant_core::error::GardenError;
use verdant_core::events::GardenEvent;
use verdant_core::registry::Registry;
use verdant_core::traits::{GrowthModel, Ledger};
use verdant_core::types::{AccountId, Plant, PlantId, Stage};
use verdant_growth::GrowthEngine;

/// The lifecycle manager for one garden.
///
/// Owns the registry and the committed event log, holds the growth engine,
/// and talks to the external ledger. Not thread-safe on its own — wrap in
/// [`GardenService`](crate::service::GardenService) for shared use.
pub struct Garden<L: Ledger> {
    config: GardenConfig,
    growth: GrowthEngine,
    registry: Registry,
    ledger: L,
    events: Vec<GardenEvent>,
}

impl<L: Ledger> Garden<L> {
    /// Create a garden with the given tuning and ledger.
    pub fn new(config: GardenConfig, ledger: L) -> Self {
        let growth = GrowthEngine::new(&config);
        Self {
            config,
            growth,
            registry: Registry::new(),
            ledger,
            events: Vec::new(),
        }
    }

    /// Seed a new plant for `owner` against `payment`.
    ///
    /// The ledger is credited with the entry price; any overpayment stays
    /// with the caller's transfer primitive. Returns the new id.
    ///
    /// # Errors
    ///
    /// [`GardenError::InsufficientPayment`] if `payment` is below the entry
    /// price.
    pub fn seed(
        &mut self,
        owner: AccountId,
        payment: u64,
        now: u64,
    ) -> Result<PlantId, GardenError> {
        let required = self.config.entry_price;
        if payment < required {
            return Err(GardenError::InsufficientPayment {
                paid: payment,
                required,
            });
        }
        // Last fallible step; everything after this commits.
        self.ledger.credit(required)?;
        let id = self.registry.allocate_id();
        self.registry.insert(Plant::new(id, owner, now));
        info!(%id, owner = %owner, "seeded plant");
        self.record(GardenEvent::Planted { id, owner });
        Ok(id)
    }

    /// Recompute and persist resource level and stage for one plant.
    ///
    /// Idempotent: repeated calls at the same `now` change nothing further.
    /// Persists death (once, with a [`GardenEvent::Died`]) when the resource
    /// has depleted; otherwise persists a stage advance when one is due.
    /// A no-op on inactive plants.
    ///
    /// # Errors
    ///
    /// [`GardenError::PlantNotFound`] for an unknown id.
    pub fn refresh(&mut self, id: PlantId, now: u64) -> Result<(), GardenError> {
        let current = self
            .registry
            .get(id)
            .cloned()
            .ok_or(GardenError::PlantNotFound(id))?;
        if !current.active {
            return Ok(());
        }
        let (plant, events) = Self::apply_refresh(&self.growth, current, now);
        debug!(%id, level = plant.resource_level, "refreshed plant");
        self.store(plant, events);
        Ok(())
    }

    /// Water a plant back to full resource.
    ///
    /// Resets the resource level to 100 and the depletion anchor to `now`,
    /// then applies the refresh step (which may advance the stage).
    ///
    /// # Errors
    ///
    /// - [`GardenError::PlantNotFound`] for an unknown or harvested id
    /// - [`GardenError::NotOwner`] if `caller` did not create the plant
    /// - [`GardenError::NotAlive`] if death was persisted or the computed
    ///   resource level has already reached zero
    pub fn water(&mut self, id: PlantId, caller: AccountId, now: u64) -> Result<(), GardenError> {
        let mut plant = self.active_owned(id, &caller)?;
        self.check_alive(&plant, now)?;

        plant.resource_level = FULL_RESOURCE;
        plant.last_refreshed_at = now;
        let mut events = vec![GardenEvent::Watered {
            id,
            level: FULL_RESOURCE,
        }];
        let (plant, more) = Self::apply_refresh(&self.growth, plant, now);
        events.extend(more);
        debug!(%id, "watered plant");
        self.store(plant, events);
        Ok(())
    }

    /// Harvest a blooming plant, paying out the fixed reward.
    ///
    /// Applies the refresh step first, so a stage advance due at `now`
    /// counts; the refreshed stage must be [`Stage::Blooming`]. On success
    /// the plant becomes inactive (kept for history) and the reward moves to
    /// `caller` through the ledger. A failed payout aborts the whole
    /// transaction with the plant still active and nothing persisted.
    ///
    /// # Errors
    ///
    /// - [`GardenError::PlantNotFound`] for an unknown or already harvested id
    /// - [`GardenError::NotOwner`] if `caller` did not create the plant
    /// - [`GardenError::NotAlive`] if death was persisted or the computed
    ///   resource level has already reached zero
    /// - [`GardenError::StageNotReady`] before bloom
    /// - [`GardenError::Ledger`] if the ledger cannot cover the reward or
    ///   the transfer is rejected
    pub fn harvest(
        &mut self,
        id: PlantId,
        caller: AccountId,
        now: u64,
    ) -> Result<u64, GardenError> {
        let current = self.active_owned(id, &caller)?;
        self.check_alive(&current, now)?;

        let (mut plant, mut events) = Self::apply_refresh(&self.growth, current, now);
        if plant.stage != Stage::Blooming {
            return Err(GardenError::StageNotReady {
                plant: id,
                stage: plant.stage,
            });
        }
        let reward = self.config.harvest_reward;
        // Last fallible step; nothing has been persisted yet.
        self.ledger.debit(&caller, reward)?;
        plant.active = false;
        events.push(GardenEvent::Harvested {
            id,
            owner: caller,
            reward,
        });
        info!(%id, owner = %caller, reward, "harvested plant");
        self.store(plant, events);
        Ok(reward)
    }

    /// Read-only snapshot with the resource level recomputed for display.
    ///
    /// Nothing is persisted. Served for inactive (harvested) plants too.
    ///
    /// # Errors
    ///
    /// [`GardenError::PlantNotFound`] for an unknown id.
    pub fn get_plant(&self, id: PlantId, now: u64) -> Result<Plant, GardenError> {
        let mut plant = self
            .registry
            .get(id)
            .cloned()
            .ok_or(GardenError::PlantNotFound(id))?;
        plant.resource_level =
            self.growth
                .resource_level(plant.resource_level, plant.last_refreshed_at, now);
        Ok(plant)
    }

    /// All ids ever created by `owner`, in creation order.
    ///
    /// Includes inactive and dead plants; empty for unknown owners.
    pub fn owner_plants(&self, owner: &AccountId) -> &[PlantId] {
        self.registry.owner_plants(owner)
    }

    /// Drain the entire ledger balance to the administrator.
    ///
    /// Returns the amount moved; sweeping an empty ledger returns 0.
    ///
    /// # Errors
    ///
    /// - [`GardenError::NotAdmin`] for any caller other than the configured
    ///   administrator
    /// - [`GardenError::Ledger`] if the transfer primitive rejects
    pub fn sweep(&mut self, caller: AccountId) -> Result<u64, GardenError> {
        if caller != self.config.admin {
            return Err(GardenError::NotAdmin(caller));
        }
        let amount = self.ledger.balance();
        if amount > 0 {
            self.ledger.debit(&caller, amount)?;
        }
        info!(admin = %caller, amount, "swept ledger balance");
        Ok(amount)
    }

    /// Notifications from committed transactions, oldest first.
    pub fn events(&self) -> &[GardenEvent] {
        &self.events
    }

    /// Drain the committed event log.
    pub fn take_events(&mut self) -> Vec<GardenEvent> {
        std::mem::take(&mut self.events)
    }

    /// The external ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The tuning this garden was created with.
    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    /// Number of plant records ever created.
    pub fn plant_count(&self) -> usize {
        self.registry.len()
    }

    /// Fetch an active plant owned by `caller`, as a staging clone.
    fn active_owned(&self, id: PlantId, caller: &AccountId) -> Result<Plant, GardenError> {
        let plant = self
            .registry
            .get(id)
            .filter(|p| p.active)
            .cloned()
            .ok_or(GardenError::PlantNotFound(id))?;
        if plant.owner != *caller {
            return Err(GardenError::NotOwner {
                plant: id,
                caller: *caller,
            });
        }
        Ok(plant)
    }

    /// Liveness gate: persisted flag first, then the freshly computed level.
    ///
    /// Computed death is not persisted here — that stays with `refresh` —
    /// so a failing gate has no side effects at all.
    fn check_alive(&self, plant: &Plant, now: u64) -> Result<(), GardenError> {
        if !plant.alive {
            return Err(GardenError::NotAlive(plant.id));
        }
        let level = self
            .growth
            .resource_level(plant.resource_level, plant.last_refreshed_at, now);
        if level == 0 {
            return Err(GardenError::NotAlive(plant.id));
        }
        Ok(())
    }

    /// The shared refresh step, staged on a clone.
    ///
    /// Persists the recomputed level with its matching anchor; on depletion
    /// flips `alive` and freezes the stage at its last persisted value;
    /// otherwise recomputes the stage and records an advance when it exceeds
    /// the persisted one. The stage write is monotonic: a caller clock
    /// running behind an earlier refresh leaves the stage untouched, like
    /// the level and anchor paths. Dead plants only get the (zero) resource
    /// write.
    fn apply_refresh(
        growth: &GrowthEngine,
        mut plant: Plant,
        now: u64,
    ) -> (Plant, Vec<GardenEvent>) {
        let mut events = Vec::new();
        let level = growth.resource_level(plant.resource_level, plant.last_refreshed_at, now);
        plant.resource_level = level;
        plant.last_refreshed_at = growth.depletion_anchor(plant.last_refreshed_at, now);
        if plant.alive {
            if level == 0 {
                plant.alive = false;
                events.push(GardenEvent::Died { id: plant.id });
            } else {
                let stage = growth.stage_at(plant.planted_at, now);
                if stage > plant.stage {
                    plant.stage = stage;
                    events.push(GardenEvent::StageAdvanced {
                        id: plant.id,
                        stage,
                    });
                }
            }
        }
        (plant, events)
    }

    /// Commit a staged plant and its pending notifications.
    fn store(&mut self, plant: Plant, events: Vec<GardenEvent>) {
        if let Some(slot) = self.registry.get_mut(plant.id) {
            *slot = plant;
        }
        for event in events {
            self.record(event);
        }
    }

    fn record(&mut self, event: GardenEvent) {
        debug!(event = ?event, "committed event");
        self.events.push(event);
    }
}
