//! Subcommand implementations.

pub mod platforms;
pub mod render;
