//! Chart-dataset projection for the statlab calculators.
//!
//! Every calculator renders its result as a chart; this crate shapes engine
//! output into the `{labels, series, per-point color}` form a charting
//! frontend consumes. Datasets are derived fresh from engine results on
//! every call and are never a source of truth.
//!
//! # Examples
//!
//! ```
//! use statlab_chart::project;
//! use statlab_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::new(&[1.0, 2.0, 6.0, 7.0], 0.0, 5.0, 2).unwrap();
//! let dataset = project::frequency_bars(&table);
//! assert_eq!(dataset.labels.len(), 2);
//! assert_eq!(dataset.values, vec![2.0, 2.0]);
//! ```

pub use self::dataset::{ChartDataset, PointColor};

mod dataset;
pub mod project;
