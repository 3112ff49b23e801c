use serde::Deserialize;

use super::ConfigError;

/// Proximity search tuning.
///
/// The oversample factors cap how many candidate rows are pulled from the
/// store per query (`factor * limit`). Addresses inside the radius can be
/// missed when the capped window fills with rows that fall outside it; the
/// factors trade recall for bounded scans.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "crate::config::defaults::default_search_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "crate::config::defaults::default_search_limit")]
    pub default_limit: i64,
    #[serde(default = "crate::config::defaults::default_search_max_limit")]
    pub max_limit: i64,
    /// Candidate multiplier for bounding-box searches.
    #[serde(default = "crate::config::defaults::default_bounded_oversample")]
    pub bounded_oversample: i64,
    /// Candidate multiplier for full-table scans.
    #[serde(default = "crate::config::defaults::default_scan_oversample")]
    pub scan_oversample: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        use crate::config::defaults;

        Self {
            default_radius_km: defaults::default_search_radius_km(),
            default_limit: defaults::default_search_limit(),
            max_limit: defaults::default_search_max_limit(),
            bounded_oversample: defaults::default_bounded_oversample(),
            scan_oversample: defaults::default_scan_oversample(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_radius_km.is_finite() || self.default_radius_km <= 0.0 {
            return Err(ConfigError::Search(
                "default_radius_km must be a positive number".to_string(),
            ));
        }
        if self.max_limit < 1 {
            return Err(ConfigError::Search(
                "max_limit must be at least 1".to_string(),
            ));
        }
        if self.default_limit < 1 || self.default_limit > self.max_limit {
            return Err(ConfigError::Search(format!(
                "default_limit must be between 1 and {}",
                self.max_limit
            )));
        }
        if self.bounded_oversample < 1 || self.scan_oversample < 1 {
            return Err(ConfigError::Search(
                "oversample factors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
