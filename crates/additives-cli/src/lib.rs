//! Library side of the `additives` command: configuration, logging setup
//! and the two pipelines.

pub mod config;
pub mod logging;
pub mod pipeline;
