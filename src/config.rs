//! Host configuration read from the environment.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::Rules;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// Optional JSON file with rule overrides.
    pub rules_path: Option<PathBuf>,
    pub tick_ms: u32,
}

impl AppConfig {
    /// Read `STACKFALL_SEED`, `STACKFALL_RULES` and `STACKFALL_TICK_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Malformed numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("STACKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let rules_path = lookup("STACKFALL_RULES")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let tick_ms = lookup("STACKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        Self {
            seed,
            rules_path,
            tick_ms,
        }
    }

    /// Load rules from `rules_path`, or the defaults when none is set.
    pub fn load_rules(&self) -> Result<Rules> {
        match &self.rules_path {
            Some(path) => load_rules_file(path),
            None => Ok(Rules::default()),
        }
    }
}

pub fn load_rules_file(path: &Path) -> Result<Rules> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    Rules::from_json_str(&text)
        .with_context(|| format!("invalid rules in {}", path.display()))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
