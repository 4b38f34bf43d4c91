//! # verdant-garden
//! Lifecycle orchestration: seeding, watering, refreshing, and harvesting
//! plants as atomic transactions against the registry and the ledger.

pub mod manager;
pub mod service;

pub use manager::Garden;
pub use service::GardenService;
