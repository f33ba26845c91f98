//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides rosters and pure reference functions for testing.
//! It does NOT depend on `teamforge-solver` to avoid circular dependencies.
//!
//! - [`rosters`] - Hand-built and generated rosters
//! - [`reference`] - Exhaustive reference scoring over every split
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```

pub mod reference;
pub mod rosters;

pub use reference::{all_splits, score_split};
pub use rosters::{
    club_roster, gradient_four, odd_five, stale_primary_four, uniform_four, varied_six,
};
