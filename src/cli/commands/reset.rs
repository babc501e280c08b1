use anyhow::{Result, bail};

use super::HEAD;
use crate::parser::Subcommand;
use crate::report;
use crate::ui::Style;

/// Unstages paths, or moves HEAD with `--hard`.
pub fn run(sub: &Subcommand) -> Result<()> {
    let paths = sub.arguments();

    if sub.options().has_flag("--hard") {
        if !paths.is_empty() {
            bail!("Cannot do hard reset with paths.");
        }
        report!("HEAD is now at {}", Style::value(HEAD));
        return Ok(());
    }

    if paths.is_empty() {
        return Ok(());
    }

    report!("Unstaged changes after reset:");
    for path in paths {
        report!("M\t{path}");
    }

    Ok(())
}
