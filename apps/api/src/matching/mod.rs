//! Candidate-to-job eligibility and ranking engine.
//!
//! Pipeline: row records → normalize → evaluate per (job, candidate) pair →
//! rank eligible candidates per job → one `JobResult` per job.

pub mod eligibility;
pub mod engine;
pub mod export;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod rows;
pub mod scorer;
