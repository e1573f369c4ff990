//! Memopress CLI
//!
//! Thin batch driver over `memopress-core`: argument parsing, logging setup,
//! and the publish loop live here; all transformation logic stays in core.

pub mod cli;
pub mod commands;
