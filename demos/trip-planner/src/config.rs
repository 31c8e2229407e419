//! Trip configuration loaded from TOML.
//!
//! Describes the group (members with inline preference records) and the
//! mock catalog to generate. Loading validates every preference record and
//! rejects conflicting ones, so the permissive scoring engine only ever
//! sees records the input surface would have accepted.
//!
//! # Format
//!
//! ```toml
//! [catalog]
//! count = 10
//! seed = 7
//!
//! [[group]]
//! name = "ari"
//! [group.preference]
//! liked_categories = ["korean"]
//! cannot_eat = ["nuts"]
//! budget = { min = 9000, max = 20000 }
//! ```

use std::path::Path;

use convive::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("member {member} has conflicting preferences")]
    Conflict {
        member: String,
        conflicts: Vec<PreferenceConflict>,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// One group member as declared in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemberConfig {
    pub name: String,
    #[serde(default)]
    pub preference: Preference,
}

/// Mock catalog generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CatalogConfig {
    /// Number of candidates to generate.
    pub count: usize,
    /// RNG seed; the same seed always yields the same catalog.
    pub seed: u64,
    /// Region label appended to restaurant names.
    pub region: String,
    /// Lower bound for generated per-person prices, inclusive.
    pub min_price: u32,
    /// Upper bound for generated per-person prices, inclusive.
    pub max_price: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            count: 20,
            seed: 42,
            region: "Seoul".to_string(),
            min_price: 10_000,
            max_price: 50_000,
        }
    }
}

/// Full trip configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TripConfig {
    #[serde(default)]
    pub group: Vec<MemberConfig>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl TripConfig {
    /// Loads configuration from a TOML file, validating every record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, the TOML is invalid,
    /// a member's preference record contradicts itself, or the price
    /// bounds are inverted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads from `path` when it exists, otherwise falls back to the
    /// built-in sample trip.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::sample())
        }
    }

    /// Parses configuration from a TOML string, validating every record.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: TripConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// A built-in three-person trip used when no config file is given.
    pub fn sample() -> Self {
        let mut ari = Preference::new();
        ari.liked_categories.insert(FoodCategory::Korean);
        ari.liked_keywords.insert(FoodKeyword::Spicy);

        let mut bo = Preference::new();
        bo.disliked_categories.insert(FoodCategory::Korean);
        bo.liked_keywords.insert(FoodKeyword::Seafood);
        bo.budget = Some(BudgetRange::new(10_000, 25_000));

        let mut cam = Preference::new();
        cam.cannot_eat.insert(FoodKeyword::Nuts);
        cam.disliked_keywords.insert(FoodKeyword::Raw);

        TripConfig {
            group: vec![
                MemberConfig {
                    name: "ari".to_string(),
                    preference: ari,
                },
                MemberConfig {
                    name: "bo".to_string(),
                    preference: bo,
                },
                MemberConfig {
                    name: "cam".to_string(),
                    preference: cam,
                },
            ],
            catalog: CatalogConfig::default(),
        }
    }

    /// Materializes the configured group as members with sequential ids.
    pub fn members(&self) -> Vec<Member> {
        self.group
            .iter()
            .enumerate()
            .map(|(index, member)| {
                Member::new(
                    MemberId(index as u32 + 1),
                    member.name.clone(),
                    member.preference.clone(),
                )
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.min_price > self.catalog.max_price {
            return Err(ConfigError::Invalid(format!(
                "min_price {} exceeds max_price {}",
                self.catalog.min_price, self.catalog.max_price
            )));
        }
        if self.catalog.count == 0 {
            return Err(ConfigError::Invalid("catalog count is zero".to_string()));
        }
        for member in &self.group {
            let conflicts = member.preference.conflicts();
            if !conflicts.is_empty() {
                return Err(ConfigError::Conflict {
                    member: member.name.clone(),
                    conflicts,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TripConfig::from_toml_str(
            r#"
            [catalog]
            count = 12
            seed = 7
            region = "Busan"
            min_price = 8000
            max_price = 30000

            [[group]]
            name = "ari"
            [group.preference]
            liked_categories = ["korean"]
            cannot_eat = ["nuts"]
            budget = { min = 9000, max = 20000 }

            [[group]]
            name = "bo"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.count, 12);
        assert_eq!(config.catalog.region, "Busan");
        assert_eq!(config.group.len(), 2);

        let members = config.members();
        assert_eq!(members[0].id, MemberId(1));
        assert!(members[0]
            .preference
            .liked_categories
            .contains(&FoodCategory::Korean));
        assert!(members[1].preference.is_empty());
    }

    #[test]
    fn test_catalog_defaults_apply() {
        let config = TripConfig::from_toml_str(
            r#"
            [[group]]
            name = "solo"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.count, 20);
        assert_eq!(config.catalog.seed, 42);
    }

    #[test]
    fn test_conflicting_preference_rejected() {
        let err = TripConfig::from_toml_str(
            r#"
            [[group]]
            name = "contrarian"
            [group.preference]
            liked_categories = ["korean"]
            disliked_categories = ["korean"]
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Conflict { member, conflicts } => {
                assert_eq!(member, "contrarian");
                assert_eq!(
                    conflicts,
                    vec![PreferenceConflict::Category(FoodCategory::Korean)]
                );
            }
            other => panic!("expected conflict error, got {other}"),
        }
    }

    #[test]
    fn test_inverted_price_bounds_rejected() {
        let err = TripConfig::from_toml_str(
            r#"
            [catalog]
            min_price = 30000
            max_price = 10000
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_sample_is_valid() {
        let config = TripConfig::sample();
        assert!(config.validate().is_ok());
        assert_eq!(config.members().len(), 3);
    }
}
