//! Feature Builder Module
//! Extension point for engineered columns (interactions, polynomial terms,
//! binning, categorical encodings).

use polars::prelude::*;

/// Run the feature-engineering stage on a loaded dataset.
///
/// The four Iris measurements are already strongly predictive, so no columns
/// are derived and the frame is returned unchanged.
pub fn create_features(df: DataFrame) -> DataFrame {
    FeatureBuilder.build(df)
}

/// Stateless feature-engineering stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    pub fn build(&self, df: DataFrame) -> DataFrame {
        tracing::debug!(
            rows = df.height(),
            columns = df.width(),
            "No derived features, passing dataset through"
        );
        df
    }
}
