//! Engine configuration.
//!
//! The host's CLI/config loader supplies an enable flag and an integer
//! level; both are forwarded verbatim into the engine, which clamps the
//! level into the supported range.

use serde::{Deserialize, Serialize};

/// Lowest supported compression level.
pub const MIN_LEVEL: u8 = 1;

/// Highest supported compression level.
pub const MAX_LEVEL: u8 = 9;

/// Default level when the host does not configure one.
pub const DEFAULT_LEVEL: u8 = 6;

/// Compression configuration, read by every codec operation.
///
/// Compression starts disabled: until the host opts in, encode and
/// decode are byte-identical passthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Whether encode paths frame and compress at all.
    pub enabled: bool,
    /// Compression level in `[MIN_LEVEL, MAX_LEVEL]`. Currently reserved
    /// for future codec tuning; does not alter round-trip behavior.
    pub level: u8,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LEVEL,
        }
    }
}

impl CompressionConfig {
    /// Build a config, clamping the host-supplied level.
    pub fn new(enabled: bool, level: i32) -> Self {
        Self {
            enabled,
            level: clamp_level(level),
        }
    }
}

/// Clamp a host-supplied level into `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(level: i32) -> u8 {
    level.clamp(MIN_LEVEL as i32, MAX_LEVEL as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled_level_six() {
        let config = CompressionConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.level, 6);
    }

    #[test]
    fn test_level_clamping() {
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(1), 1);
        assert_eq!(clamp_level(5), 5);
        assert_eq!(clamp_level(9), 9);
        assert_eq!(clamp_level(15), 9);
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(clamp_level(i32::MAX), 9);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = CompressionConfig::new(true, 9);
        let json = serde_json::to_string(&config).unwrap();
        let back: CompressionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
