//! Notifications emitted by committed lifecycle transactions.
//!
//! Events are recorded only when the whole transaction commits; a failed
//! precondition emits nothing, not even partially.

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, PlantId, Stage};

/// A notification from a committed lifecycle transaction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum GardenEvent {
    /// A new plant was seeded.
    Planted { id: PlantId, owner: AccountId },
    /// A plant was watered back to full resource.
    Watered { id: PlantId, level: u8 },
    /// A refresh persisted a stage different from the stored one.
    StageAdvanced { id: PlantId, stage: Stage },
    /// A refresh found the resource depleted and persisted death.
    /// Emitted exactly once per plant.
    Died { id: PlantId },
    /// A blooming plant was harvested and the reward paid out.
    Harvested { id: PlantId, owner: AccountId, reward: u64 },
}
