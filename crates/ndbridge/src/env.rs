use std::env;
use std::sync::OnceLock;

use crate::shape::SUPPORTED_RANKS;

static UNDECLARED_RANKS: OnceLock<Vec<usize>> = OnceLock::new();

/// Parses a comma-separated rank list, keeping only supported ranks.
pub(crate) fn parse_ranks(value: &str) -> Vec<usize> {
    let mut ranks = Vec::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.parse::<usize>() {
            Ok(rank) if SUPPORTED_RANKS.contains(&rank) => {
                if !ranks.contains(&rank) {
                    ranks.push(rank);
                }
            }
            _ => log::warn!("NDBRIDGE_UNDECLARED_RANKS: ignoring entry '{entry}'"),
        }
    }
    if ranks.is_empty() {
        return SUPPORTED_RANKS.to_vec();
    }
    ranks.sort_unstable();
    ranks
}

/// Ranks accepted by conversions that declare no expected dimensions.
pub(crate) fn undeclared_ranks() -> &'static [usize] {
    UNDECLARED_RANKS.get_or_init(|| match env::var("NDBRIDGE_UNDECLARED_RANKS") {
        Ok(value) if !value.trim().is_empty() => parse_ranks(&value),
        _ => SUPPORTED_RANKS.to_vec(),
    })
}
