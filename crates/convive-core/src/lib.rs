//! Convive Core - domain types for group dining consensus
//!
//! This crate provides the fundamental types shared across Convive:
//! - Closed tag vocabularies for cuisines and flavor keywords
//! - Preference records, budget ranges, and group members
//! - Restaurant candidates
//! - The `[0, 100]` compatibility score type

pub mod food;
pub mod preference;
pub mod restaurant;
pub mod score;

pub use food::{FoodCategory, FoodKeyword};
pub use preference::{BudgetRange, Member, MemberId, Preference, PreferenceConflict};
pub use restaurant::Restaurant;
pub use score::CompatScore;
