//! Time-series utilities shared by detectors and the orchestrator.
//!
//! Modules include:
//! - `epoch`: convert between epoch seconds and naive UTC datetimes
//! - `estimate`: estimate a typical inter-arrival gap
//! - `resolve`: direct detection with a synthetic-series fallback
/// Epoch constants and conversions.
pub mod epoch;
/// Modal gap estimation.
pub mod estimate;
/// Two-attempt frequency resolution.
pub mod resolve;
