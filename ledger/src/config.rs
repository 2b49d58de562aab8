//! Ledger harness configuration.

use axle_primitives::types::{MAX_KEY_LEN, MAX_VALUE_LEN};

/// Resource limits enforced on world-state mutations.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Maximum key length in bytes.
    pub max_key_len: usize,
    /// Maximum value length in bytes.
    pub max_value_len: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_track_primitive_limits() {
        let config = LedgerConfig::default();
        assert_eq!(config.max_key_len, MAX_KEY_LEN);
        assert_eq!(config.max_value_len, MAX_VALUE_LEN);
    }
}
