//! # verdant-core
//! Foundation types and traits for the Verdant simulation.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod registry;
pub mod traits;
pub mod types;
