//! Subcommand implementations.
//!
//! These are toy handlers: they print what git would print and never touch
//! a repository.

use anyhow::Result;
use std::path::Path;

use super::GitCommand;
use crate::parser::Subcommand;

/// Add command handler.
pub mod add;

/// Branch command handler.
pub mod branch;

/// Clone command handler.
pub mod clone;

/// Commit command handler.
pub mod commit;

/// Pull command handler.
pub mod pull;

/// Push command handler.
pub mod push;

/// Reset command handler.
pub mod reset;

/// Rm command handler.
pub mod rm;

/// Status command handler.
pub mod status;

/// The branch every toy repository is on.
pub const CURRENT_BRANCH: &str = "main";

/// The commit id every toy repository points at.
pub const HEAD: &str = "0d0b4762";

/// Runs the handler for `command`.
pub fn run(command: GitCommand, sub: &Subcommand) -> Result<()> {
    tracing::debug!(command = command.name(), args = sub.arguments().len(), "dispatching");

    match command {
        GitCommand::Add => add::run(sub),
        GitCommand::Branch => branch::run(sub),
        GitCommand::Clone => clone::run(sub),
        GitCommand::Commit => commit::run(sub),
        GitCommand::Pull => pull::run(sub),
        GitCommand::Push => push::run(sub),
        GitCommand::Reset => reset::run(sub),
        GitCommand::Rm => rm::run(sub),
        GitCommand::Status => status::run(sub),
    }
}

/// Returns the first path that does not exist on disk.
fn first_missing(paths: &[String]) -> Option<&str> {
    paths
        .iter()
        .map(String::as_str)
        .find(|path| !Path::new(path).exists())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Parses `tokens` with the `subgit` registry and returns the subcommand.
    pub fn sub(tokens: &[&str]) -> Subcommand {
        crate::cli::parser()
            .parse(tokens)
            .unwrap()
            .into_subcommand()
            .unwrap()
    }

    #[test]
    fn test_first_missing() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.txt");
        std::fs::write(&present, "x").unwrap();
        let present = present.to_str().unwrap().to_string();
        let absent = temp_dir.path().join("absent.txt");
        let absent = absent.to_str().unwrap().to_string();

        assert_eq!(first_missing(std::slice::from_ref(&present)), None);
        assert_eq!(
            first_missing(&[present, absent.clone()]),
            Some(absent.as_str())
        );
        assert_eq!(first_missing(&[]), None);
    }
}
