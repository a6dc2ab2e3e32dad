//! Statistics Summary Module
//! Per-column descriptive statistics for a loaded dataset.

use crate::data::is_numeric;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Descriptive statistics for a single column.
///
/// Numeric fields are populated for integer and float columns, `unique` for
/// everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub count: usize,
    pub null_count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
    pub unique: Option<usize>,
}

impl ColumnSummary {
    fn empty(name: String, dtype: String, null_count: usize) -> Self {
        Self {
            name,
            dtype,
            count: 0,
            null_count,
            mean: None,
            std: None,
            min: None,
            p25: None,
            median: None,
            p75: None,
            max: None,
            unique: None,
        }
    }
}

/// Summarise every column of `df`, in frame order.
pub fn describe(df: &DataFrame) -> Vec<ColumnSummary> {
    StatsCalculator::describe(df)
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute summaries for all columns in parallel.
    pub fn describe(df: &DataFrame) -> Vec<ColumnSummary> {
        tracing::debug!(columns = df.width(), "Summarising dataset");

        // Use rayon for parallel computation; collect keeps column order
        df.get_columns()
            .par_iter()
            .map(Self::summarize_column)
            .collect()
    }

    /// Summarise one column.
    pub fn summarize_column(column: &Column) -> ColumnSummary {
        let name = column.name().to_string();
        let dtype = column.dtype().to_string();
        let null_count = column.null_count();

        if is_numeric(column.dtype()) {
            let values = Self::numeric_values(column);
            Self::compute_numeric_summary(name, dtype, null_count, &values)
        } else {
            let series = column.as_materialized_series().drop_nulls();
            let mut summary = ColumnSummary::empty(name, dtype, null_count);
            summary.count = series.len();
            summary.unique = series.n_unique().ok();
            summary
        }
    }

    /// Non-null, non-NaN values of a numeric column as f64.
    fn numeric_values(column: &Column) -> Vec<f64> {
        let values: PolarsResult<Vec<f64>> = column.cast(&DataType::Float64).and_then(|col| {
            Ok(col
                .f64()?
                .into_iter()
                .flatten()
                .filter(|v| !v.is_nan())
                .collect())
        });

        match values {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    column = %column.name(),
                    error = %e,
                    "Failed to read numeric column as f64, skipping statistics"
                );
                Vec::new()
            }
        }
    }

    /// Compute descriptive statistics for an array of values.
    pub fn compute_numeric_summary(
        name: String,
        dtype: String,
        null_count: usize,
        values: &[f64],
    ) -> ColumnSummary {
        let mut summary = ColumnSummary::empty(name, dtype, null_count);
        let n = values.len();
        summary.count = n;
        if n == 0 {
            return summary;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        // Sample standard deviation is undefined for a single value
        let std: f64 = values.iter().std_dev();

        summary.mean = Some(Statistics::mean(values.iter()));
        summary.std = (!std.is_nan()).then_some(std);
        summary.min = sorted.first().copied();
        summary.p25 = Some(Self::percentile(&sorted, 25.0));
        summary.median = Some(Self::percentile(&sorted, 50.0));
        summary.p75 = Some(Self::percentile(&sorted, 75.0));
        summary.max = sorted.last().copied();
        summary
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}
