//! Bundled diabetes reference dataset.

use std::str::FromStr;

use crate::prelude::*;

/// Snapshot of the diabetes study table: ten covariates and the progression target `y`.
static TABLE: &str = include_str!("../data/diabetes.csv");

/// Column used as the single model feature.
const FEATURE_COLUMN: &str = "bmi";

const TARGET_COLUMN: &str = "y";

pub struct Dataset {
    features: Vec<f64>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Parses the bundled table and picks out the feature and target columns.
    #[instrument(skip_all)]
    pub fn load() -> Result<Self> {
        let mut lines = TABLE.lines();
        let header = lines.next().ok_or_else(|| anyhow!("the dataset is empty"))?;
        let columns: Vec<&str> = header.split(',').collect();
        let feature_index = columns
            .iter()
            .position(|name| *name == FEATURE_COLUMN)
            .ok_or_else(|| anyhow!("missing the `{}` column", FEATURE_COLUMN))?;
        let target_index = columns
            .iter()
            .position(|name| *name == TARGET_COLUMN)
            .ok_or_else(|| anyhow!("missing the `{}` column", TARGET_COLUMN))?;

        let mut features = Vec::new();
        let mut targets = Vec::new();
        for (line_number, line) in lines.enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            features.push(
                parse_field(&fields, feature_index)
                    .with_context(|| format!("failed to parse row #{}", line_number + 1))?,
            );
            targets.push(
                parse_field(&fields, target_index)
                    .with_context(|| format!("failed to parse row #{}", line_number + 1))?,
            );
        }

        info!(n_rows = features.len(), feature = FEATURE_COLUMN, "loaded");
        Ok(Self { features, targets })
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

fn parse_field(fields: &[&str], index: usize) -> Result<f64> {
    let field = fields
        .get(index)
        .ok_or_else(|| anyhow!("missing field #{}", index))?;
    f64::from_str(field).with_context(|| format!("invalid number `{}`", field))
}
