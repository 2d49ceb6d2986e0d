use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_PIVOTS, DEFAULT_TOLERANCE, EquilibriumEnumerator};

use super::SolverError;

/// Parameters of an equilibrium search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Absolute tolerance under which two equilibria are the same.
    pub tolerance: f64,
    /// Pivot ceiling of every single path.
    pub max_pivots: usize,
    /// Number of distinct equilibria after which the search stops. Defaults
    /// to the number of labels.
    pub target: Option<usize>,
    /// Restart paths from the equilibria already found.
    pub graph_search: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_pivots: DEFAULT_MAX_PIVOTS,
            target: None,
            graph_search: true,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.) {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.max_pivots == 0 {
            return Err(SolverError::InvalidConfig(
                "max_pivots must be a positive integer".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn enumerator(&self) -> EquilibriumEnumerator {
        EquilibriumEnumerator::new()
            .tolerance(self.tolerance)
            .max_pivots(self.max_pivots)
            .target(self.target)
            .graph_search(self.graph_search)
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), SolverError> {
        let contents =
            serde_json::to_string_pretty(self).map_err(SolverError::ParseConfigJsonError)?;
        fs::write(path.as_ref(), contents)
            .map_err(|err| SolverError::InvalidPath(err, path.as_ref().display().to_string()))?;
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|err| SolverError::InvalidPath(err, path.as_ref().display().to_string()))?;
        let config: Self =
            serde_json::from_str(&contents).map_err(SolverError::ParseConfigJsonError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"tolerance": 1e-8}"#).unwrap();

        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_pivots, DEFAULT_MAX_PIVOTS);
        assert_eq!(config.target, None);
        assert!(config.graph_search);
    }

    #[test]
    fn validate() {
        assert!(SolverConfig::default().validate().is_ok());

        let config = SolverConfig {
            max_pivots: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SolverError::InvalidConfig(_))
        ));

        let config = SolverConfig {
            tolerance: -1.,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("nashsolver-{}.json", std::process::id()));
        let config = SolverConfig {
            tolerance: 1e-7,
            target: Some(2),
            graph_search: false,
            ..Default::default()
        };

        config.to_file(&path).unwrap();
        let loaded = SolverConfig::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            SolverConfig::from_file("/nonexistent/nashsolver.json"),
            Err(SolverError::InvalidPath(_, _))
        ));
    }
}
