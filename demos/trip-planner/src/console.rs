//! Colorful console output for the ranking result.

use std::collections::HashMap;

use convive::prelude::*;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

/// Prints the banner and version line.
pub fn print_banner() {
    let banner = r#"
   ____                _
  / ___|___  _ ____   _(_)_   _____
 | |   / _ \| '_ \ \ / / \ \ / / _ \
 | |__| (_) | | | \ V /| |\ V /  __/
  \____\___/|_| |_|\_/ |_| \_/ \___|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}",
        format!(
            "        v{} - Group Dining Consensus",
            env!("CARGO_PKG_VERSION")
        )
        .bright_white()
        .bold()
    );
}

fn score_cell(score: CompatScore) -> String {
    let text = format!("{:>3}", score.value());
    if score.is_like() {
        text.bright_green().bold().to_string()
    } else if score.is_dislike() {
        text.bright_red().bold().to_string()
    } else {
        text.yellow().to_string()
    }
}

fn price_cell(avg_price: Option<u32>) -> String {
    match avg_price {
        Some(price) => price.to_formatted_string(&Locale::en),
        None => "-".to_string(),
    }
}

/// Prints the ranked candidate table with per-group verdicts.
pub fn print_ranking(ranked: &[RankedRestaurant], members: &[Member]) {
    let names: HashMap<MemberId, &str> = members
        .iter()
        .map(|member| (member.id, member.name.as_str()))
        .collect();
    let to_names = |ids: &[MemberId]| {
        ids.iter()
            .map(|id| *names.get(id).unwrap_or(&"?"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!();
    println!(
        "  {:>2}  {:<28} {:<12} {:>8} {:>5}  {:>5}  {}",
        "#".bright_black(),
        "restaurant".bright_black(),
        "category".bright_black(),
        "price".bright_black(),
        "score".bright_black(),
        "rate".bright_black(),
        "verdict".bright_black(),
    );

    for (position, entry) in ranked.iter().enumerate() {
        let restaurant = &entry.restaurant;
        let consensus = &entry.consensus;

        let mut verdict = String::new();
        if !consensus.liked_members.is_empty() {
            verdict.push_str(&format!(
                "{} {}",
                "+".bright_green(),
                to_names(&consensus.liked_members)
            ));
        }
        if !consensus.disliked_members.is_empty() {
            if !verdict.is_empty() {
                verdict.push_str("  ");
            }
            verdict.push_str(&format!(
                "{} {}",
                "-".bright_red(),
                to_names(&consensus.disliked_members)
            ));
        }

        println!(
            "  {:>2}  {:<28} {:<12} {:>8} {}  {:>5}  {}",
            (position + 1).to_string().white(),
            restaurant.name.white().bold(),
            restaurant
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            price_cell(restaurant.avg_price),
            score_cell(consensus.total_score),
            restaurant
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            verdict,
        );
    }
    println!();
}

/// Prints why the top candidate scored the way it did, member by member.
pub fn print_breakdown(top: &RankedRestaurant, members: &[Member]) {
    println!(
        "  {} {}",
        "Top pick:".bright_black(),
        top.restaurant.name.bright_cyan().bold()
    );

    for member in members {
        let breakdown = explain(&member.preference, &top.restaurant);
        let total = breakdown.total();
        println!("    {} {}", member.name.white().bold(), score_cell(total));
        if breakdown.adjustments.is_empty() {
            println!("      {}", "no preferences matched".bright_black());
        }
        for adjustment in &breakdown.adjustments {
            println!("      {}", adjustment.to_string().bright_black());
        }
    }
    println!();
}
