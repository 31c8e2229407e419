//! Convive - group dining consensus engine.
//!
//! Re-exports the domain model from `convive-core` and the scoring
//! operations from `convive-scoring` behind a single dependency. Most
//! consumers only need the [`prelude`].
//!
//! # Example
//!
//! ```
//! use convive::prelude::*;
//!
//! let members = vec![Member::new(MemberId(1), "ari", Preference::new())];
//! let candidates = vec![Restaurant::new("r1", "Noodle Shed")];
//!
//! let ranked = rank(exclude_inedible(candidates, &members), &members);
//! assert_eq!(ranked[0].consensus.total_score, CompatScore::BASE);
//! ```

pub use convive_core::{
    BudgetRange, CompatScore, FoodCategory, FoodKeyword, Member, MemberId, Preference,
    PreferenceConflict, Restaurant,
};
pub use convive_scoring::{
    consensus, exclude_inedible, explain, inedible_keywords, rank, score, Adjustment,
    ConsensusResult, RankedRestaurant, ScoreBreakdown,
};

/// Everything a typical consumer needs, in one import.
pub mod prelude {
    pub use convive_core::{
        BudgetRange, CompatScore, FoodCategory, FoodKeyword, Member, MemberId, Preference,
        PreferenceConflict, Restaurant,
    };
    pub use convive_scoring::{
        consensus, exclude_inedible, explain, rank, score, ConsensusResult, RankedRestaurant,
    };
}
