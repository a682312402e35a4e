//! Allocation hints that downstream crates can serialize/deserialize.
//!
//! Configuration only changes how much memory materializing operators reserve
//! up front. It never changes what a sequence yields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqConfig {
    /// Initial capacity of hash indexes built by grouping, joins and set algebra.
    /// Zero means "use the source's known size, if any".
    pub index_capacity_hint: usize,

    /// Initial capacity of buffers built by `reverse` and the ordering operators.
    /// Zero means "use the source's known size, if any".
    pub buffer_capacity_hint: usize,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self {
            index_capacity_hint: 0,
            buffer_capacity_hint: 0,
        }
    }
}

impl SeqConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQKIT_INDEX_CAPACITY_HINT`: initial hash index capacity
    /// - `SEQKIT_BUFFER_CAPACITY_HINT`: initial materialization buffer capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQKIT_INDEX_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.index_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("SEQKIT_BUFFER_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_capacity_hint = v;
            }
        }

        cfg
    }

    /// Index capacity to reserve given an optional known source size.
    pub fn index_capacity(&self, known_len: Option<usize>) -> usize {
        pick(self.index_capacity_hint, known_len)
    }

    /// Buffer capacity to reserve given an optional known source size.
    pub fn buffer_capacity(&self, known_len: Option<usize>) -> usize {
        pick(self.buffer_capacity_hint, known_len)
    }
}

fn pick(hint: usize, known_len: Option<usize>) -> usize {
    if hint > 0 {
        hint
    } else {
        known_len.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_overrides_known_len() {
        let cfg = SeqConfig {
            index_capacity_hint: 64,
            ..SeqConfig::default()
        };
        assert_eq!(cfg.index_capacity(Some(3)), 64);
        assert_eq!(cfg.buffer_capacity(Some(3)), 3);
        assert_eq!(cfg.buffer_capacity(None), 0);
    }

    #[test]
    fn test_config_serde_defaults_missing_fields() {
        let cfg: SeqConfig = serde_json::from_str(r#"{"buffer_capacity_hint": 8}"#).unwrap();
        assert_eq!(cfg.buffer_capacity_hint, 8);
        assert_eq!(cfg.index_capacity_hint, 0);
    }

    #[test]
    fn test_from_env_reads_hints_and_ignores_garbage() {
        // The only test in this crate that touches these variables.
        std::env::set_var("SEQKIT_INDEX_CAPACITY_HINT", "256");
        std::env::set_var("SEQKIT_BUFFER_CAPACITY_HINT", "32");
        let cfg = SeqConfig::from_env();
        assert_eq!(cfg.index_capacity_hint, 256);
        assert_eq!(cfg.buffer_capacity_hint, 32);

        std::env::set_var("SEQKIT_INDEX_CAPACITY_HINT", "lots");
        std::env::remove_var("SEQKIT_BUFFER_CAPACITY_HINT");
        let cfg = SeqConfig::from_env();
        assert_eq!(cfg, SeqConfig::default());

        std::env::remove_var("SEQKIT_INDEX_CAPACITY_HINT");
    }
}
