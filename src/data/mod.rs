//! Data module - CSV loading

mod loader;

pub use loader::{
    column_names, is_numeric, numeric_columns, read_csv, CsvOptions, DataLoader, LoaderError,
};
