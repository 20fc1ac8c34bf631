//! CLI library components for the UDS extraction tool.

pub mod columns;
pub mod logging;
pub mod pipeline;
