//! Features module - feature engineering stage

mod builder;

pub use builder::{create_features, FeatureBuilder};
