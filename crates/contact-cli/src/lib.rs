//! CLI library components for contact deduplication.

pub mod config;
pub mod logging;
pub mod pipeline;
