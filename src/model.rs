//! Simple linear regression fitted with ordinary least squares.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub k: f64,
    pub bias: f64,
}

impl Regression {
    /// Fits `y = k·x + bias` with the closed-form least-squares solution.
    #[instrument(skip_all, fields(n_points = x.len()))]
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.is_empty() {
            return Err(anyhow!("cannot fit on an empty dataset"));
        }
        if x.len() != y.len() {
            return Err(anyhow!(
                "feature and target lengths differ ({} vs {})",
                x.len(),
                y.len(),
            ));
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;
        let covariance: f64 = x
            .iter()
            .zip(y)
            .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
            .sum();
        let variance: f64 = x.iter().map(|xi| (xi - mean_x) * (xi - mean_x)).sum();
        if variance == 0.0 {
            return Err(anyhow!("the feature column has zero variance"));
        }

        let k = covariance / variance;
        let bias = mean_y - k * mean_x;
        Ok(Self { k, bias })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.k * x + self.bias
    }

    /// Persists the model as a pickle stream, overwriting any previous artifact.
    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result {
        let blob = serde_pickle::to_vec(self, Default::default())
            .context("failed to serialize the model")?;
        fs::write(&path, blob)
            .with_context(|| format!("failed to write the model to {:?}", path.as_ref()))
    }

    /// Reads a previously persisted model back.
    #[instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let blob = fs::read(&path)
            .with_context(|| format!("failed to read the model from {:?}", path.as_ref()))?;
        serde_pickle::from_slice(&blob, Default::default())
            .context("failed to deserialize the model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_ok() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0];
        let regression = Regression::fit(&x, &y).unwrap();
        assert!((regression.k - 2.0).abs() < f64::EPSILON);
        assert!((regression.bias - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fit_is_deterministic() {
        let x = [0.3, 1.7, 2.9, 4.2, 5.0];
        let y = [11.0, 9.5, 17.0, 20.1, 24.8];
        assert_eq!(
            Regression::fit(&x, &y).unwrap(),
            Regression::fit(&x, &y).unwrap(),
        );
    }

    #[test]
    fn fit_rejects_empty_dataset() {
        assert!(Regression::fit(&[], &[]).is_err());
    }

    #[test]
    fn fit_rejects_mismatched_lengths() {
        assert!(Regression::fit(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn fit_rejects_zero_variance() {
        assert!(Regression::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn predict_ok() {
        let regression = Regression { k: 2.0, bias: 1.0 };
        assert!((regression.predict(3.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn save_load_ok() {
        let path = std::env::temp_dir().join(format!("diabetes-{}.pkl", std::process::id()));
        let regression = Regression { k: 9.87, bias: -135.2 };
        regression.save(&path).unwrap();
        let loaded = Regression::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, regression);
    }

    #[test]
    fn save_overwrites_previous_artifact() {
        let path = std::env::temp_dir().join(format!("diabetes-rewrite-{}.pkl", std::process::id()));
        Regression { k: 1.0, bias: 0.0 }.save(&path).unwrap();
        let regression = Regression { k: 2.5, bias: 0.5 };
        regression.save(&path).unwrap();
        let loaded = Regression::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, regression);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Regression::load("/nonexistent/diabetes.pkl").is_err());
    }
}
