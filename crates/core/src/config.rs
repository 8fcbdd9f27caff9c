//! Engine tuning knobs
//!
//! Every field has a default matching the classic game, so a partial TOML
//! table (or none at all) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_MOVE_MS, LEVEL_SPEEDUP_MS, MIN_MOVE_MS, MOVE_COOLDOWN_MS, ROTATE_COOLDOWN_MS,
    ROWS_PER_LEVEL, SOFT_DROP_MOVE_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gravity interval at level 0
    pub base_move_ms: u32,
    /// Gravity interval while soft dropping
    pub soft_drop_move_ms: u32,
    /// Interval removed per level
    pub level_speedup_ms: u32,
    /// Gravity interval floor
    pub min_move_ms: u32,
    /// Input pause after a horizontal move, 0 disables
    pub move_cooldown_ms: u32,
    /// Input pause after a rotation, 0 disables
    pub rotate_cooldown_ms: u32,
    /// Cleared rows per level-up, 0 disables leveling
    pub rows_per_level: u32,
    pub start_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_move_ms: BASE_MOVE_MS,
            soft_drop_move_ms: SOFT_DROP_MOVE_MS,
            level_speedup_ms: LEVEL_SPEEDUP_MS,
            min_move_ms: MIN_MOVE_MS,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
            rotate_cooldown_ms: ROTATE_COOLDOWN_MS,
            rows_per_level: ROWS_PER_LEVEL,
            start_level: 0,
        }
    }
}

impl EngineConfig {
    /// Same config with input cooldowns turned off
    pub fn without_cooldowns(self) -> Self {
        Self {
            move_cooldown_ms: 0,
            rotate_cooldown_ms: 0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: EngineConfig = toml::from_str("start_level = 3\nmove_cooldown_ms = 0").unwrap();
        assert_eq!(config.start_level, 3);
        assert_eq!(config.move_cooldown_ms, 0);
        assert_eq!(config.base_move_ms, 500);
        assert_eq!(config.rotate_cooldown_ms, 200);
    }

    #[test]
    fn test_empty_table_is_default() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
