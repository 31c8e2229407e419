//! Batch ranking of candidate lists by group consensus.

use convive_core::{Member, Restaurant};

use crate::consensus::{consensus, ConsensusResult};

/// A candidate paired with the group's verdict on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRestaurant {
    pub restaurant: Restaurant,
    pub consensus: ConsensusResult,
}

/// Ranks `restaurants` by descending consensus score.
///
/// Each candidate is scored independently; the sort is stable, so
/// candidates with equal scores keep their input order.
pub fn rank(restaurants: Vec<Restaurant>, members: &[Member]) -> Vec<RankedRestaurant> {
    let mut ranked: Vec<RankedRestaurant> = restaurants
        .into_iter()
        .map(|restaurant| {
            let consensus = consensus(members, &restaurant);
            RankedRestaurant {
                restaurant,
                consensus,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.consensus.total_score.cmp(&a.consensus.total_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use convive_test::{korean_bbq, korean_lover, mystery_diner, sample_catalog, sample_group};

    #[test]
    fn test_sorted_non_increasing() {
        let ranked = rank(sample_catalog(), &sample_group());
        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].consensus.total_score >= pair[1].consensus.total_score);
        }
    }

    #[test]
    fn test_best_candidate_first() {
        // For a lone Korean lover the Korean place scores 80, everything
        // else stays at base.
        let members = vec![korean_lover(1)];
        let ranked = rank(sample_catalog(), &members);

        assert_eq!(ranked[0].restaurant.id, korean_bbq().id);
        assert_eq!(ranked[0].consensus.total_score.value(), 80);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // An empty group scores every candidate 0, so the output order
        // must be the input order.
        let catalog = sample_catalog();
        let input_ids: Vec<String> = catalog.iter().map(|r| r.id.clone()).collect();

        let ranked = rank(catalog, &[]);
        let output_ids: Vec<String> = ranked.iter().map(|r| r.restaurant.id.clone()).collect();
        assert_eq!(output_ids, input_ids);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank(Vec::new(), &sample_group()).is_empty());
    }

    #[test]
    fn test_consensus_attached_per_candidate() {
        let ranked = rank(vec![mystery_diner()], &sample_group());
        assert_eq!(ranked[0].consensus.member_count, 3);
        assert_eq!(ranked[0].consensus.total_score.value(), 50);
    }
}
