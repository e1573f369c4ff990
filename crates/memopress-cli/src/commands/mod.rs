//! CLI command implementations

pub mod publish;
