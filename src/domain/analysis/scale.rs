//! Comparison Scale - The 1..=9 pairwise judgement scale and its reciprocals.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Largest intensity the Saaty scale defines.
pub const SAATY_SCALE_MAX: u8 = 9;

/// Discrete judgement scale: `1/max, ..., 1/2, 1, 2, ..., max`.
///
/// Reciprocals are always exact `1/k`, never a rounded lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonScale {
    max: u8,
}

impl ComparisonScale {
    /// The canonical 1..=9 scale.
    pub const SAATY: ComparisonScale = ComparisonScale {
        max: SAATY_SCALE_MAX,
    };

    /// Creates a scale with the given maximum intensity (2..=9).
    pub fn new(max: u8) -> Result<Self, ValidationError> {
        if !(2..=SAATY_SCALE_MAX).contains(&max) {
            return Err(ValidationError::out_of_range(
                "scale_max",
                2.0,
                SAATY_SCALE_MAX as f64,
                max as f64,
            ));
        }
        Ok(Self { max })
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// All scale values in ascending order.
    pub fn values(&self) -> Vec<f64> {
        let reciprocals = (2..=self.max).rev().map(|k| 1.0 / k as f64);
        let intensities = (1..=self.max).map(f64::from);
        reciprocals.chain(intensities).collect()
    }

    /// Snaps a positive judgement to the nearest scale value, measured in log space
    /// so that `x` and `1/x` snap symmetrically.
    pub fn snap(&self, value: f64) -> f64 {
        let target = value.ln();
        self.values()
            .into_iter()
            .min_by(|a, b| (a.ln() - target).abs().total_cmp(&(b.ln() - target).abs()))
            .unwrap_or(1.0)
    }
}

impl Default for ComparisonScale {
    fn default() -> Self {
        Self::SAATY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saaty_scale_has_seventeen_values() {
        let values = ComparisonScale::SAATY.values();
        assert_eq!(values.len(), 17);
        assert!((values[0] - 1.0 / 9.0).abs() < 1e-12);
        assert_eq!(values[8], 1.0);
        assert_eq!(values[16], 9.0);
    }

    #[test]
    fn values_are_ascending() {
        let values = ComparisonScale::new(5).unwrap().values();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn new_rejects_out_of_range_max() {
        assert!(ComparisonScale::new(1).is_err());
        assert!(ComparisonScale::new(10).is_err());
        assert!(ComparisonScale::new(2).is_ok());
    }

    #[test]
    fn snap_two_decimal_reciprocals() {
        let scale = ComparisonScale::SAATY;
        assert!((scale.snap(0.33) - 1.0 / 3.0).abs() < 1e-12);
        assert!((scale.snap(0.11) - 1.0 / 9.0).abs() < 1e-12);
        assert!((scale.snap(0.17) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn snap_point_one_three_is_one_eighth() {
        // 0.13 sits between 1/8 and 1/7; it belongs to 8, not to a rounded table entry.
        let snapped = ComparisonScale::SAATY.snap(0.13);
        assert!((snapped - 0.125).abs() < 1e-12);
    }

    #[test]
    fn snap_clamps_to_scale_bounds() {
        let scale = ComparisonScale::new(5).unwrap();
        assert_eq!(scale.snap(40.0), 5.0);
        assert!((scale.snap(0.001) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn snap_keeps_exact_values() {
        let scale = ComparisonScale::SAATY;
        for value in scale.values() {
            assert_eq!(scale.snap(value), value);
        }
    }
}
