use std::time::Duration;
use serde::Deserialize;
use crate::constants::*;

/// Rotator configuration, fixed once the rotator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorOptions {
    pub auto: bool,
    pub interval: Duration,
    pub duration: Duration,
    pub pause: bool,
    pub z_index_offset: i32,
}

impl Default for RotatorOptions {
    fn default() -> Self {
        Self {
            auto: true,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            pause: true,
            z_index_offset: DEFAULT_Z_INDEX_OFFSET,
        }
    }
}

/// Partial options. Only the fields that are set replace the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionOverrides {
    pub auto: Option<bool>,
    pub interval_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub pause: Option<bool>,
    pub z_index_offset: Option<i32>,
}

impl OptionOverrides {
    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn or(self, other: OptionOverrides) -> OptionOverrides {
        OptionOverrides {
            auto: other.auto.or(self.auto),
            interval_ms: other.interval_ms.or(self.interval_ms),
            duration_ms: other.duration_ms.or(self.duration_ms),
            pause: other.pause.or(self.pause),
            z_index_offset: other.z_index_offset.or(self.z_index_offset),
        }
    }
}

impl RotatorOptions {
    pub fn extend(self, overrides: OptionOverrides) -> RotatorOptions {
        RotatorOptions {
            auto: overrides.auto.unwrap_or(self.auto),
            interval: overrides.interval_ms.map_or(self.interval, Duration::from_millis),
            duration: overrides.duration_ms.map_or(self.duration, Duration::from_millis),
            pause: overrides.pause.unwrap_or(self.pause),
            z_index_offset: overrides.z_index_offset.unwrap_or(self.z_index_offset),
        }
    }
}
