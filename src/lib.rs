//! Core library for the `latmeter` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, URL normalization, the timed HTTP prober, and the sample
//! aggregation that produces the run summary. The primary user-facing
//! interface is the `latmeter` command-line application.
pub mod args;
pub mod error;
pub mod http;
pub mod metrics;
