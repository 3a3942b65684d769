//! Region scoring and transcript summarization for riboscore.
//!
//! The pipeline runs in three stages, each independently usable:
//!
//! 1. [`score_regions`] aggregates signal over every query region (dropping
//!    regions at or below the minimum-length cutoff) into [`RegionScore`]s.
//! 2. [`summarize`] groups region scores by transcript name and computes
//!    per-transcript statistics, ordered ascending by total signal.
//! 3. [`filter_excluding`] removes summaries whose span overlaps an
//!    exclusion interval.
//!
//! [`RegionScore`]: riboscore_core::models::RegionScore
pub mod aggregate;
pub mod filter;
pub mod scorer;
pub mod summary;

// re-exports
pub use aggregate::aggregate;
pub use filter::{ExclusionSet, filter_excluding, filter_stream};
pub use scorer::{DEFAULT_CUTOFF, ScoringReport, score_regions};
pub use summary::summarize;
