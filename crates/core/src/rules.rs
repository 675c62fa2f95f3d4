//! Rules - the tunable scoring and timing policy
//!
//! Defaults follow classic scoring. A host may load overrides from JSON; any
//! field left out keeps its default.
//!
//! ```
//! use stackfall_core::Rules;
//!
//! let rules = Rules::from_json_str(r#"{ "rows_per_level": 5 }"#).unwrap();
//! assert_eq!(rules.rows_per_level, 5);
//! assert_eq!(rules.score_table, [0, 40, 100, 300, 1200]);
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::types::{BASE_DROP_MS, LINE_SCORES, MAX_KICK, MIN_DROP_MS, ROWS_PER_LEVEL};

/// Largest kick bound accepted by [`Rules::validate`]
pub const MAX_KICK_LIMIT: i8 = 4;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("rules are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rows_per_level must be at least 1")]
    ZeroRowsPerLevel,
    #[error("base_drop_ms must be at least 1")]
    ZeroBaseDrop,
    #[error("min_drop_ms ({min}) exceeds base_drop_ms ({base})")]
    MinAboveBase { min: u32, base: u32 },
    #[error("max_kick must be within 0..={limit}, got {value}")]
    KickOutOfRange { value: i8, limit: i8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Points per simultaneous clear count (index 0..=4), scaled by level + 1
    pub score_table: [u32; 5],
    pub rows_per_level: u32,
    pub base_drop_ms: u32,
    pub min_drop_ms: u32,
    /// Widest horizontal kick tried for a blocked rotation
    pub max_kick: i8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            score_table: LINE_SCORES,
            rows_per_level: ROWS_PER_LEVEL,
            base_drop_ms: BASE_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
            max_kick: MAX_KICK,
        }
    }
}

impl Rules {
    /// Parse and validate rules from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(s)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.rows_per_level == 0 {
            return Err(RulesError::ZeroRowsPerLevel);
        }
        if self.base_drop_ms == 0 {
            return Err(RulesError::ZeroBaseDrop);
        }
        if self.min_drop_ms > self.base_drop_ms {
            return Err(RulesError::MinAboveBase {
                min: self.min_drop_ms,
                base: self.base_drop_ms,
            });
        }
        if !(0..=MAX_KICK_LIMIT).contains(&self.max_kick) {
            return Err(RulesError::KickOutOfRange {
                value: self.max_kick,
                limit: MAX_KICK_LIMIT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Rules::default().validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(Rules::from_json_str("{}").unwrap(), Rules::default());
    }

    #[test]
    fn custom_score_table_is_loaded() {
        let rules = Rules::from_json_str(r#"{ "score_table": [0, 1, 2, 3, 4] }"#).unwrap();
        assert_eq!(rules.score_table, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn rejects_inverted_intervals() {
        let err = Rules::from_json_str(r#"{ "base_drop_ms": 50, "min_drop_ms": 100 }"#).unwrap_err();
        assert!(matches!(err, RulesError::MinAboveBase { min: 100, base: 50 }));
    }

    #[test]
    fn rejects_zero_rows_per_level() {
        let err = Rules::from_json_str(r#"{ "rows_per_level": 0 }"#).unwrap_err();
        assert!(matches!(err, RulesError::ZeroRowsPerLevel));
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            Rules::from_json_str(r#"{ "gravity": 3 }"#),
            Err(RulesError::Parse(_))
        ));
        assert!(matches!(Rules::from_json_str("{"), Err(RulesError::Parse(_))));
    }

    #[test]
    fn rejects_wide_kicks() {
        let err = Rules::from_json_str(r#"{ "max_kick": 9 }"#).unwrap_err();
        assert_eq!(err.to_string(), "max_kick must be within 0..=4, got 9");
    }
}
