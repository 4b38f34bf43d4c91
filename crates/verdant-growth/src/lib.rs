//! # verdant-growth
//! Pure time-based resource depletion and growth-stage models.
//!
//! Everything here is a deterministic function of caller-supplied Unix
//! timestamps and fixed tuning parameters — no wall clock, no side effects.
//! [`GrowthEngine`] packages the free functions behind the
//! [`GrowthModel`](verdant_core::traits::GrowthModel) trait from
//! verdant-core.

pub mod engine;
pub mod stage;
pub mod water;

pub use engine::GrowthEngine;
