//! Iris Pipeline - CSV dataset loading and feature engineering
//!
//! Loads a CSV file into a Polars `DataFrame` with per-column type inference,
//! runs it through the feature-engineering stage and summarises the result.

pub mod config;
pub mod data;
pub mod features;
pub mod stats;

pub use data::{read_csv, LoaderError};
pub use features::create_features;
