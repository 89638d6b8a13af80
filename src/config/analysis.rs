//! Matrix analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    ComparisonScale, MatrixPolicy, DEFAULT_RECIPROCAL_TOLERANCE, SAATY_SCALE_MAX,
};

/// How submitted matrices are validated
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Allowed deviation of `m[i][j] * m[j][i]` from 1
    #[serde(default = "default_reciprocal_tolerance")]
    pub reciprocal_tolerance: f64,

    /// Snap judgements to the comparison scale before validation
    #[serde(default)]
    pub snap_to_scale: bool,

    /// Largest judgement on the comparison scale
    #[serde(default = "default_scale_max")]
    pub scale_max: u8,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.reciprocal_tolerance > 0.0 && self.reciprocal_tolerance < 1.0) {
            return Err(ValidationError::InvalidReciprocalTolerance);
        }
        if ComparisonScale::new(self.scale_max).is_err() {
            return Err(ValidationError::InvalidScaleMax);
        }
        Ok(())
    }

    /// Matrix policy for the decision model
    pub fn matrix_policy(&self) -> Result<MatrixPolicy, ValidationError> {
        self.validate()?;
        let scale = if self.snap_to_scale {
            Some(ComparisonScale::new(self.scale_max).map_err(|_| ValidationError::InvalidScaleMax)?)
        } else {
            None
        };
        Ok(MatrixPolicy {
            reciprocal_tolerance: self.reciprocal_tolerance,
            scale,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reciprocal_tolerance: default_reciprocal_tolerance(),
            snap_to_scale: false,
            scale_max: default_scale_max(),
        }
    }
}

fn default_reciprocal_tolerance() -> f64 {
    DEFAULT_RECIPROCAL_TOLERANCE
}

fn default_scale_max() -> u8 {
    SAATY_SCALE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.reciprocal_tolerance, 0.05);
        assert!(!config.snap_to_scale);
        assert_eq!(config.scale_max, 9);
        assert_eq!(config.matrix_policy().unwrap(), MatrixPolicy::default());
    }

    #[test]
    fn test_snap_to_scale_sets_policy_scale() {
        let config = AnalysisConfig {
            snap_to_scale: true,
            scale_max: 5,
            ..Default::default()
        };
        let policy = config.matrix_policy().unwrap();
        assert_eq!(policy.scale.map(|s| s.max()), Some(5));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tolerance in [0.0, -0.1, 1.0, f64::NAN] {
            let config = AnalysisConfig {
                reciprocal_tolerance: tolerance,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidReciprocalTolerance)
            ));
        }
    }

    #[test]
    fn test_rejects_bad_scale_max() {
        for scale_max in [0, 1, 10] {
            let config = AnalysisConfig {
                scale_max,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidScaleMax)));
        }
    }
}
