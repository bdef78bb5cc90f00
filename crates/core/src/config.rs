use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reveal_threshold must be within 0..=1, got {0}")]
    Threshold(f64),
    #[error("carousel_window must be at least 1")]
    EmptyWindow,
    #[error("{field} must be a finite, non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Tunables for the view-state machines.
///
/// Every field has a default, so an empty JSON object (or no config at all)
/// yields the standard page behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Minimum intersection ratio before a section counts as seen.
    pub reveal_threshold: f64,
    /// Margin shaved off every side of the viewport before intersection tests.
    pub reveal_margin_px: f64,
    /// How far below the viewport top a section edge may be and still count
    /// as scrolled past.
    pub active_lookahead_px: f64,
    /// Height of the fixed navigation bar that scroll targets clear.
    pub header_clearance_px: f64,
    /// Delay between expanding a timeline card and scrolling it into view.
    pub expand_scroll_delay_ms: f64,
    /// Number of project cards shown at once.
    pub carousel_window: usize,
    /// Duration of host-animated smooth scrolls.
    pub smooth_scroll_ms: f64,
    /// Prefix prepended to logical asset paths (deploy base path).
    pub asset_base_path: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_margin_px: 50.0,
            active_lookahead_px: 100.0,
            header_clearance_px: 80.0,
            expand_scroll_delay_ms: 100.0,
            carousel_window: 3,
            smooth_scroll_ms: 600.0,
            asset_base_path: String::new(),
        }
    }
}

impl FolioConfig {
    /// Parse a JSON config, filling missing fields with defaults.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: FolioConfig = serde_json::from_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Threshold(self.reveal_threshold));
        }
        if self.carousel_window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        let lengths = [
            ("reveal_margin_px", self.reveal_margin_px),
            ("active_lookahead_px", self.active_lookahead_px),
            ("header_clearance_px", self.header_clearance_px),
            ("expand_scroll_delay_ms", self.expand_scroll_delay_ms),
            ("smooth_scroll_ms", self.smooth_scroll_ms),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FolioConfig::from_json(b"{}").expect("empty object is valid");
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.carousel_window, 3);
        assert!((config.header_clearance_px - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_override() {
        let config = FolioConfig::from_json(br#"{"carousel_window": 2, "asset_base_path": "/site"}"#);
        assert!(matches!(
            &config,
            Ok(c) if c.carousel_window == 2 && c.asset_base_path == "/site"
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = FolioConfig::from_json(br#"{"reveal_threshold": 1.5}"#);
        assert!(matches!(err, Err(ConfigError::Threshold(_))));
    }

    #[test]
    fn rejects_zero_window() {
        let err = FolioConfig::from_json(br#"{"carousel_window": 0}"#);
        assert!(matches!(err, Err(ConfigError::EmptyWindow)));
    }

    #[test]
    fn rejects_negative_delay() {
        let err = FolioConfig::from_json(br#"{"expand_scroll_delay_ms": -1}"#);
        assert!(matches!(
            err,
            Err(ConfigError::Negative { field: "expand_scroll_delay_ms", .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(FolioConfig::from_json(b"{"), Err(ConfigError::Json(_))));
    }
}
