//! JSON documents read and written by the `sequence` command.

pub(crate) mod report;
pub(crate) mod sequences;
