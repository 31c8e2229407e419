//! Group consensus scoring for Convive.
//!
//! Pure, stateless scoring of restaurant candidates against group member
//! preferences:
//! - Per-member compatibility scoring ([`score`]) with an explanation
//!   variant ([`explain`])
//! - Group consensus aggregation ([`consensus`])
//! - Batch ranking ([`rank`])
//! - The cannot-eat hard pre-filter ([`exclude_inedible`])
//!
//! Every operation is referentially transparent: no I/O, no shared state,
//! no failure modes beyond the numeric clamping the score type enforces.
//!
//! # Example
//!
//! ```
//! use convive_core::{FoodCategory, Member, MemberId, Preference, Restaurant};
//! use convive_scoring::{consensus, rank};
//!
//! let mut pro = Preference::new();
//! pro.liked_categories.insert(FoodCategory::Korean);
//! let members = vec![
//!     Member::new(MemberId(1), "ari", pro),
//!     Member::new(MemberId(2), "bo", Preference::new()),
//! ];
//!
//! let candidates = vec![
//!     Restaurant::new("r1", "Noodle Shed"),
//!     Restaurant::new("r2", "Charcoal Lane").with_category(FoodCategory::Korean),
//! ];
//!
//! let ranked = rank(candidates, &members);
//! assert_eq!(ranked[0].restaurant.id, "r2");
//! assert_eq!(ranked[0].consensus.total_score.value(), 65);
//! ```

pub mod compat;
pub mod consensus;
pub mod prefilter;
pub mod rank;

pub use compat::{explain, score, Adjustment, ScoreBreakdown};
pub use consensus::{consensus, ConsensusResult};
pub use prefilter::{exclude_inedible, inedible_keywords};
pub use rank::{rank, RankedRestaurant};
