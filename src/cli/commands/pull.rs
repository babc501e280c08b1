use anyhow::Result;

use crate::parser::Subcommand;
use crate::report;

/// Pulls nothing, since the toy repository is always up to date.
pub fn run(sub: &Subcommand) -> Result<()> {
    if let Some(remote) = sub.arguments().first() {
        report!("From {remote}");
    }

    report!("Already up to date.");
    Ok(())
}
