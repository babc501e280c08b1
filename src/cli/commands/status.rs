use anyhow::Result;

use super::CURRENT_BRANCH;
use crate::parser::Subcommand;
use crate::report;
use crate::ui::Style;

/// Prints a clean working tree. `-s`/`--short` prints nothing.
pub fn run(sub: &Subcommand) -> Result<()> {
    if sub.options().has_flag_or("-s", "--short") {
        return Ok(());
    }

    report!("On branch {}", Style::value(CURRENT_BRANCH));
    report!("nothing to commit, working tree clean");
    Ok(())
}
