//! The authoritative plant table plus owner index.
//!
//! The registry exclusively owns [`Plant`] records. It provides storage and
//! identifier allocation only; all lifecycle behavior lives in the manager.
//! Records are never removed — harvested plants stay in the table with
//! `active == false` — and the owner index is append-only and never pruned,
//! so it may reference inactive or dead plants.
//!
//! Not thread-safe — the manager serializes access behind a mutex.

use std::collections::{BTreeMap, HashMap};

use crate::types::{AccountId, Plant, PlantId};

/// In-memory plant table keyed by monotonically increasing id.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Plant records by id.
    plants: BTreeMap<PlantId, Plant>,
    /// Append-only owner → ids index, in creation order.
    by_owner: HashMap<AccountId, Vec<PlantId>>,
    /// Next id to hand out. Starts at 1; ids are never reused.
    next_id: u64,
}

impl Registry {
    /// Create an empty registry. The first allocated id is 1.
    pub fn new() -> Self {
        Self {
            plants: BTreeMap::new(),
            by_owner: HashMap::new(),
            next_id: 1,
        }
    }

    /// Allocate the next plant id.
    ///
    /// Callers pair this with [`insert`](Self::insert); an allocated id that
    /// is never inserted simply leaves a gap, which is harmless.
    pub fn allocate_id(&mut self) -> PlantId {
        let id = PlantId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Store a plant and append its id to the owner index.
    pub fn insert(&mut self, plant: Plant) {
        self.by_owner.entry(plant.owner).or_default().push(plant.id);
        self.plants.insert(plant.id, plant);
    }

    /// Look up a plant by id. Returns `None` if the id was never allocated.
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(&id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.get_mut(&id)
    }

    /// All ids ever created by `owner`, in creation order.
    ///
    /// Includes inactive and dead plants; empty for unknown owners.
    pub fn owner_plants(&self, owner: &AccountId) -> &[PlantId] {
        self.by_owner.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of plant records ever created.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Whether no plants have been created.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Iterate over all records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(seed: u8) -> AccountId {
        AccountId::from_bytes([seed; 32])
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut registry = Registry::new();
        assert_eq!(registry.allocate_id(), PlantId(1));
        assert_eq!(registry.allocate_id(), PlantId(2));
        assert_eq!(registry.allocate_id(), PlantId(3));
    }

    #[test]
    fn insert_then_get() {
        let mut registry = Registry::new();
        let id = registry.allocate_id();
        registry.insert(Plant::new(id, acct(1), 0));
        assert_eq!(registry.get(id).map(|p| p.id), Some(id));
        assert!(registry.get(PlantId(99)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn owner_index_is_append_only_and_ordered() {
        let mut registry = Registry::new();
        let owner = acct(1);
        let other = acct(2);
        for _ in 0..3 {
            let id = registry.allocate_id();
            registry.insert(Plant::new(id, owner, 0));
        }
        let id = registry.allocate_id();
        registry.insert(Plant::new(id, other, 0));

        assert_eq!(
            registry.owner_plants(&owner),
            &[PlantId(1), PlantId(2), PlantId(3)]
        );
        assert_eq!(registry.owner_plants(&other), &[PlantId(4)]);
        assert_eq!(registry.owner_plants(&acct(9)), &[] as &[PlantId]);
    }

    #[test]
    fn index_keeps_inactive_plants() {
        let mut registry = Registry::new();
        let owner = acct(1);
        let id = registry.allocate_id();
        registry.insert(Plant::new(id, owner, 0));
        if let Some(plant) = registry.get_mut(id) {
            plant.active = false;
        }
        assert_eq!(registry.owner_plants(&owner), &[id]);
        assert_eq!(registry.get(id).map(|p| p.active), Some(false));
    }

    #[test]
    fn iter_yields_id_order() {
        let mut registry = Registry::new();
        for seed in [3u8, 1, 2] {
            let id = registry.allocate_id();
            registry.insert(Plant::new(id, acct(seed), 0));
        }
        let ids: Vec<PlantId> = registry.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlantId(1), PlantId(2), PlantId(3)]);
    }
}
