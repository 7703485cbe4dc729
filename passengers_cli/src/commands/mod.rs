//! CLI subcommand implementations.

pub mod load;
pub mod status;
