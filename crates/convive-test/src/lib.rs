//! Shared test fixtures for Convive crates.
//!
//! This crate provides canned members and restaurant candidates for
//! testing. It does NOT depend on `convive-scoring` to avoid circular
//! dependencies.
//!
//! - [`members`] - members with representative preference shapes
//! - [`restaurants`] - a small fixed candidate catalog
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! convive-test = { workspace = true }
//! ```

pub mod members;
pub mod restaurants;

// Re-export commonly used fixtures at crate root for convenience
pub use members::{allergic, budget_diner, korean_hater, korean_lover, omnivore, sample_group};
pub use restaurants::{korean_bbq, mystery_diner, oyster_bar, sample_catalog, sushi_counter};
