//! Descriptive statistics for the statlab calculators.
//!
//! This crate provides the sample-summary layer shared by the calculators:
//!
//! - **Sample parsing**: Tolerant extraction of numeric samples from free text
//! - **Descriptive statistics**: Mean, median, variance, quartiles, IQR, outlier fences
//! - **Percentiles**: Linear-interpolation percentile computation
//! - **Frequency tables**: Class-based binning with relative and cumulative frequencies
//!
//! # Modules
//!
//! - [`sample`]: Parsing whitespace-delimited numeric input
//! - [`descriptive`]: Summary measures for a single sample
//! - [`percentile`]: Percentile and quartile computation over sorted data
//! - [`frequency`]: Frequency-table construction for histogram display
//!
//! # Examples
//!
//! ## Summarizing a sample
//!
//! ```
//! use statlab_stats::descriptive::DescriptiveSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let summary = DescriptiveSummary::new(values).unwrap();
//! assert_eq!(summary.mean, 3.0);
//! assert_eq!(summary.median, 3.0);
//! ```
//!
//! ## Parsing user input
//!
//! ```
//! use statlab_stats::sample::Sample;
//!
//! let sample = Sample::parse("12 7.5 banana 3").unwrap();
//! assert_eq!(sample.values(), &[12.0, 7.5, 3.0]);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod percentile;
pub mod sample;
