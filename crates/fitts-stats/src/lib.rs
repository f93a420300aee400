//! Statistical utilities for pointing-performance analysis.
//!
//! This crate provides the sample statistics the analysis engine reports:
//!
//! - **Descriptive statistics**: mean, median, sample variance and standard deviation
//! - **Distribution shape**: bias-corrected skewness and excess kurtosis
//! - **Normality testing**: the [`normality::NormalityTest`] seam and a Lilliefors implementation
//!
//! Degenerate inputs (empty or too-small samples, zero variance, non-finite
//! values) are reported as [`StatsError`] rather than `NaN`.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`shape`]: Skewness and kurtosis estimators
//! - [`normality`]: Goodness-of-fit tests for normality
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use fitts_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Testing for normality
//!
//! ```
//! use fitts_stats::normality::{Lilliefors, NormalityTest};
//!
//! let values = [9.3, -10.7, 32.8, 4.6, 12.1, -20.3, 0.5, 3.3, 25.0, -5.5];
//! let normal = Lilliefors::default().is_normal(&values).unwrap();
//! assert!(normal);
//! ```

pub use self::error::StatsError;

pub mod descriptive;
mod error;
pub mod normality;
pub mod shape;
