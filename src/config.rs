//! Runtime configuration from environment variables.
//!
//! - `TAG_SEED`: RNG seed for AI spawns (default: derived from the clock)
//! - `TAG_LOG_PATH`: JSON-lines journal path (default: disabled)
//! - `TAG_AI_TICK_MS`: AI step period (default: 500, minimum 50)
//!
//! Unparsable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::AI_TICK_MS;

/// Shortest accepted AI step period.
pub const MIN_AI_TICK_MS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub ai_tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            log_path: None,
            ai_tick_ms: AI_TICK_MS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests inject a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TAG_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("TAG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let ai_tick_ms = lookup("TAG_AI_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms >= MIN_AI_TICK_MS)
            .unwrap_or(AI_TICK_MS);

        Self {
            seed,
            log_path,
            ai_tick_ms,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            ai_tick_ms: self.ai_tick_ms,
            ..EngineConfig::default()
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_reads_all_keys() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TAG_SEED", "42"),
            ("TAG_LOG_PATH", " /tmp/tag.jsonl "),
            ("TAG_AI_TICK_MS", "250"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/tag.jsonl"));
        assert_eq!(cfg.ai_tick_ms, 250);
        assert_eq!(cfg.engine_config().ai_tick_ms, 250);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TAG_LOG_PATH", "   "),
            ("TAG_AI_TICK_MS", "10"),
        ]));
        assert!(cfg.log_path.is_none());
        assert_eq!(cfg.ai_tick_ms, AI_TICK_MS);

        let cfg = AppConfig::from_lookup(lookup(&[("TAG_AI_TICK_MS", "fast")]));
        assert_eq!(cfg.ai_tick_ms, AI_TICK_MS);
    }

    #[test]
    fn test_board_size_is_fixed() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.engine_config().board_size, crate::types::BOARD_SIZE);
    }
}
