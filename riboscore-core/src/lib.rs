//! Core library for riboscore: tools for scoring signal support over genomic regions.
//!
//! This crate holds the shared data model (regions, query regions, per-region
//! scores, transcript summaries) and the IO utilities the rest of the
//! workspace builds on. The aggregation engine itself lives in
//! `riboscore-track` and `riboscore-scoring`.
pub mod errors;
pub mod models;
pub mod utils;
