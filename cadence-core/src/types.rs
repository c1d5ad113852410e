//! Re-export of foundational types from `cadence-types`.
// Consolidated re-exports so downstream crates can depend on `cadence-core` only

pub use cadence_types::{
    CadenceConfig, CadenceError, EstimatorConfig, FallbackPolicy, FrequencyLabel,
    IntervalEstimate, IntervalSource, Resolution, ResolutionPath, ResolverConfig, TieBreak,
};

pub use chrono::NaiveDateTime;
