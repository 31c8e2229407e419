//! CompatScore - compatibility score type

use std::fmt;

use serde::{Deserialize, Serialize};

/// A member-to-restaurant compatibility score, always within `[0, 100]`.
///
/// Scores start from [`CompatScore::BASE`] and move up or down as
/// preference rules match; the scorer clamps the accumulated value into
/// range before wrapping it in this type.
///
/// # Examples
///
/// ```
/// use convive_core::CompatScore;
///
/// let score = CompatScore::clamped(50 + 30);
/// assert_eq!(score.value(), 80);
/// assert!(score.is_like());
///
/// // Accumulated adjustments never escape the valid range.
/// assert_eq!(CompatScore::clamped(-25), CompatScore::MIN);
/// assert_eq!(CompatScore::clamped(140), CompatScore::MAX);
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompatScore {
    value: u8,
}

impl CompatScore {
    /// The lowest possible score.
    pub const MIN: CompatScore = CompatScore { value: 0 };

    /// The neutral starting point before any adjustment applies.
    pub const BASE: CompatScore = CompatScore { value: 50 };

    /// The highest possible score.
    pub const MAX: CompatScore = CompatScore { value: 100 };

    /// Members scoring at or above this value count as liking a restaurant.
    pub const LIKE_THRESHOLD: CompatScore = CompatScore { value: 70 };

    /// Members scoring strictly below this value count as disliking it.
    pub const DISLIKE_THRESHOLD: CompatScore = CompatScore { value: 30 };

    /// Creates a score from a value already known to be in `[0, 100]`.
    #[inline]
    pub const fn of(value: u8) -> Self {
        debug_assert!(value <= 100);
        CompatScore { value }
    }

    /// Clamps a raw adjustment sum into `[0, 100]`.
    #[inline]
    pub fn clamped(raw: i32) -> Self {
        CompatScore {
            value: raw.clamp(0, 100) as u8,
        }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns true if this score reaches the like threshold.
    #[inline]
    pub fn is_like(&self) -> bool {
        *self >= Self::LIKE_THRESHOLD
    }

    /// Returns true if this score falls below the dislike threshold.
    #[inline]
    pub fn is_dislike(&self) -> bool {
        *self < Self::DISLIKE_THRESHOLD
    }

    /// Returns true if this score is neither a like nor a dislike.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        !self.is_like() && !self.is_dislike()
    }
}

impl fmt::Debug for CompatScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompatScore({})", self.value)
    }
}

impl fmt::Display for CompatScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<CompatScore> for u8 {
    fn from(score: CompatScore) -> u8 {
        score.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let score = CompatScore::of(80);
        assert_eq!(score.value(), 80);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(CompatScore::clamped(-40), CompatScore::MIN);
        assert_eq!(CompatScore::clamped(0), CompatScore::MIN);
        assert_eq!(CompatScore::clamped(55), CompatScore::of(55));
        assert_eq!(CompatScore::clamped(100), CompatScore::MAX);
        assert_eq!(CompatScore::clamped(155), CompatScore::MAX);
    }

    #[test]
    fn test_classification_thresholds() {
        assert!(CompatScore::of(70).is_like());
        assert!(!CompatScore::of(69).is_like());
        assert!(CompatScore::of(29).is_dislike());
        assert!(!CompatScore::of(30).is_dislike());
        assert!(CompatScore::of(30).is_neutral());
        assert!(CompatScore::of(69).is_neutral());
        assert!(!CompatScore::of(70).is_neutral());
    }

    #[test]
    fn test_ordering() {
        assert!(CompatScore::of(80) > CompatScore::of(50));
        assert!(CompatScore::MIN < CompatScore::BASE);
        assert!(CompatScore::BASE < CompatScore::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(CompatScore::of(42).to_string(), "42");
        assert_eq!(format!("{:?}", CompatScore::of(42)), "CompatScore(42)");
    }
}
