//! Shared helpers for the Verdant integration tests.

pub mod helpers;
