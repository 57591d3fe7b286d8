//! The tools module provides the helpers around the hufzip codec core.
//!
//! The tools are:
//! - cli: command line options for the hufzip binary.
//! - freq_count: byte frequency analysis, the first stage of compression.

pub mod cli;
pub mod freq_count;
