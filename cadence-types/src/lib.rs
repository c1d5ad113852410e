//! Cadence-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod label;
mod reports;

pub use config::{CadenceConfig, EstimatorConfig, FallbackPolicy, ResolverConfig, TieBreak};
pub use error::CadenceError;
pub use label::FrequencyLabel;
pub use reports::{IntervalEstimate, IntervalSource, Resolution, ResolutionPath};
