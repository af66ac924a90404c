//! Drag configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Quantity change per pixel of pointer movement.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.1;

/// Lowest quantity a drag can reach, as a fraction of the quantity shown when
/// the drag started.
pub const DEFAULT_DRAG_FLOOR_RATIO: f64 = 0.1;

/// Tuning for drag-to-scale gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    pub sensitivity: f64,
    pub floor_ratio: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_DRAG_SENSITIVITY,
            floor_ratio: DEFAULT_DRAG_FLOOR_RATIO,
        }
    }
}

impl DragConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `COOKSCALE_DRAG_SENSITIVITY`: quantity per pixel (default: 0.1)
    /// - `COOKSCALE_DRAG_FLOOR_RATIO`: minimum fraction of the starting
    ///   quantity (default: 0.1)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sensitivity: positive_from_env(
                "COOKSCALE_DRAG_SENSITIVITY",
                DEFAULT_DRAG_SENSITIVITY,
            )?,
            floor_ratio: positive_from_env(
                "COOKSCALE_DRAG_FLOOR_RATIO",
                DEFAULT_DRAG_FLOOR_RATIO,
            )?,
        })
    }
}

fn positive_from_env(name: &str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_positive(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
        })
}
