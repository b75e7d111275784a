//! CLI library components for the catalog sync tool.

pub mod logging;
pub mod pipeline;
pub mod types;
