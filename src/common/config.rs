//! Experiment configuration: grid size, obstacle field and search endpoints

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::error::{PlanningError, PlanningResult};
use crate::mapping::ObstacleFieldConfig;
use crate::path_planning::SearchConfig;
use crate::utils::MAX_GRID_DIMENSION;

/// Full configuration of one generate-then-search experiment
///
/// ```json
/// {
///   "width": 128,
///   "height": 128,
///   "obstacles": { "coverage_percentage": 20, "seed": 7 },
///   "search": { "start": [1, 1], "end": [128, 128], "seed": 7 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub width: usize,
    pub height: usize,
    pub obstacles: ObstacleFieldConfig,
    pub search: SearchConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            obstacles: ObstacleFieldConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json_str(json: &str) -> PlanningResult<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> PlanningResult<Self> {
        debug!("Loading config from {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> PlanningResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would fail generation or search.
    pub fn validate(&self) -> PlanningResult<()> {
        if self.width == 0 || self.height == 0 || self.width > MAX_GRID_DIMENSION || self.height > MAX_GRID_DIMENSION {
            return Err(PlanningError::InvalidParameter(format!(
                "grid dimensions must be in 1..={}, got {}x{}",
                MAX_GRID_DIMENSION, self.width, self.height
            )));
        }
        self.obstacles.validate()?;

        let end = self.search.end.unwrap_or((self.height, self.width));
        for (label, (row, col)) in [("start", self.search.start), ("end", end)].iter() {
            if *row == 0 || *col == 0 || *row > self.height || *col > self.width {
                return Err(PlanningError::InvalidParameter(format!(
                    "{} ({}, {}) is outside the {}x{} grid",
                    label, row, col, self.width, self.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 128);
        assert_eq!(config.search.start, (1, 1));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PlannerConfig::from_json_str(
            r#"{ "width": 10, "height": 8, "obstacles": { "coverage_percentage": 35 } }"#,
        )
        .unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.obstacles.coverage_percentage, 35);
        assert_eq!(config.obstacles.seed, None);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PlannerConfig::default();
        config.search.end = Some((64, 32));
        config.obstacles.seed = Some(9);
        let json = config.to_json_string().unwrap();
        assert_eq!(PlannerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let too_much = r#"{ "obstacles": { "coverage_percentage": 120 } }"#;
        assert!(matches!(
            PlannerConfig::from_json_str(too_much),
            Err(PlanningError::InvalidParameter(_))
        ));

        let past_the_edge = r#"{ "width": 5, "height": 5, "search": { "start": [1, 1], "end": [6, 5] } }"#;
        assert!(PlannerConfig::from_json_str(past_the_edge).is_err());

        let zero_based = r#"{ "width": 5, "height": 5, "search": { "start": [0, 0] } }"#;
        assert!(PlannerConfig::from_json_str(zero_based).is_err());

        assert!(matches!(PlannerConfig::from_json_str("{ nope"), Err(PlanningError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PlannerConfig::from_path("/nonexistent/grid_path_planning.json");
        assert!(matches!(result, Err(PlanningError::IoError(_))));
    }
}
