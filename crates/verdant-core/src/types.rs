//! Core simulation types: identifiers, growth stages, and plant records.
//!
//! All timestamps are Unix seconds supplied by the caller; nothing in this
//! crate reads a clock. All monetary values are in dew (1 BLOOM = 10^6 dew).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::FULL_RESOURCE;

/// Identifier of a plant record.
///
/// Allocated by the [`Registry`](crate::registry::Registry), monotonically
/// increasing starting from 1, never reused.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque 32-byte participant identity.
///
/// Supplied by the caller's authenticated context; the simulation treats it
/// as an already-verified principal and never inspects the bytes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Create an AccountId from a byte array.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Ordered growth stage, derived purely from elapsed time since planting.
///
/// `Seed < Sprout < Growing < Blooming`. Watering never advances or resets
/// the stage; only elapsed time does.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Stage {
    /// Fresh plant, less than one stage duration old.
    #[default]
    Seed,
    /// One stage duration elapsed.
    Sprout,
    /// Two stage durations elapsed.
    Growing,
    /// Three or more stage durations elapsed; eligible for harvest.
    Blooming,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seed => "seed",
            Self::Sprout => "sprout",
            Self::Growing => "growing",
            Self::Blooming => "blooming",
        };
        write!(f, "{name}")
    }
}

/// A plant record as stored in the registry.
///
/// Records are never deleted: harvesting flips `active` to false and the
/// record is kept for history. Once `alive` is persisted false it stays
/// false, `resource_level` stays 0, and `stage` never changes again.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Plant {
    /// Registry-allocated identifier, unique and never reused.
    pub id: PlantId,
    /// Creating participant. Immutable after creation.
    pub owner: AccountId,
    /// Current growth stage as last persisted.
    pub stage: Stage,
    /// Creation timestamp (Unix seconds). Immutable.
    pub planted_at: u64,
    /// Decay-accounting anchor: reset to `now` by watering, advanced to the
    /// last fully consumed depletion interval boundary by refresh.
    pub last_refreshed_at: u64,
    /// Water resource in [0, 100] as last persisted.
    pub resource_level: u8,
    /// False once death has been persisted; permanent.
    pub alive: bool,
    /// False once harvested; the record is retained but excluded from all
    /// further owner-gated operations.
    pub active: bool,
}

impl Plant {
    /// Create a freshly seeded plant at `now`.
    pub fn new(id: PlantId, owner: AccountId, now: u64) -> Self {
        Self {
            id,
            owner,
            stage: Stage::Seed,
            planted_at: now,
            last_refreshed_at: now,
            resource_level: FULL_RESOURCE,
            alive: true,
            active: true,
        }
    }
}
