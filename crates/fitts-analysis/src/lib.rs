//! Pointing-performance analysis for Fitts' law experiments.
//!
//! This crate turns recorded target-acquisition trials into the measures
//! reported in pointing studies:
//!
//! - **Path accuracy** ([`accuracy`]): seven per-trial measures of how the
//!   pointer travelled (re-entries, axis crossings, direction changes and
//!   lateral dispersion), computed in a canonical frame ([`transform`]) on
//!   smoothed binary patterns ([`pattern`]).
//! - **Throughput** ([`throughput`]): effective amplitude and width, effective
//!   index of difficulty and throughput for a sequence of trials, based on
//!   projecting each selection onto its task axis ([`projection`]).
//! - **Sequence summaries** ([`sequence`]): both analyses combined for one
//!   experimental condition.
//!
//! Every analyzer is a pure function of its inputs and its configuration
//! ([`config`]). Invalid input and degenerate statistics are reported as
//! [`AnalysisError`]; nothing is logged.
//!
//! # Examples
//!
//! ```
//! use fitts_analysis::{accuracy::AccuracyAnalyzer, demo};
//!
//! let measures = AccuracyAnalyzer::default()
//!     .analyze(demo::FROM, demo::TO, demo::WIDTH, &demo::path())
//!     .unwrap();
//! assert_eq!((measures.tre, measures.tac, measures.mdc, measures.odc), (1, 4, 4, 5));
//! ```

pub use self::{
    error::AnalysisError,
    geometry::{Point, TaskAxis},
};

pub mod accuracy;
pub mod config;
pub mod demo;
mod error;
mod geometry;
pub mod pattern;
pub mod projection;
pub mod sequence;
pub mod throughput;
pub mod transform;
