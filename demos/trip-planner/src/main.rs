//! Trip-planner demo: load a group, generate a candidate catalog, drop
//! what the group cannot eat, and rank the rest by consensus.

mod config;
mod console;
mod generator;

use std::process::ExitCode;

use convive::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::TripConfig;
use crate::generator::generate_catalog;

const DEFAULT_CONFIG_PATH: &str = "trip.toml";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    console::print_banner();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match TripConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(config::ConfigError::Conflict { member, conflicts }) => {
            error!(member = %member, "rejecting conflicting preference record");
            for conflict in conflicts {
                eprintln!("  {conflict}");
            }
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!("failed to load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let members = config.members();
    if members.is_empty() {
        error!("the configured group has no members");
        return ExitCode::FAILURE;
    }
    info!(members = members.len(), "group loaded");

    let catalog = generate_catalog(&config.catalog);
    info!(
        candidates = catalog.len(),
        seed = config.catalog.seed,
        "catalog generated"
    );

    let before = catalog.len();
    let palatable = exclude_inedible(catalog, &members);
    if palatable.len() < before {
        info!(
            excluded = before - palatable.len(),
            "removed candidates the group cannot eat"
        );
    }

    let ranked = rank(palatable, &members);
    console::print_ranking(&ranked, &members);
    if let Some(top) = ranked.first() {
        console::print_breakdown(top, &members);
    }

    ExitCode::SUCCESS
}
