//! The `subgit` example command line built on the parser.

/// Registry, usage text and subcommand resolution.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Action, GitCommand, output_config, parser, registry, resolve, usage};
