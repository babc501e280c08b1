use anyhow::{Result, bail};

use super::{CURRENT_BRANCH, HEAD};
use crate::parser::Subcommand;
use crate::ui::Style;
use crate::{report, status};

/// Pretends to record a commit with the message from `-m`/`--message`.
pub fn run(sub: &Subcommand) -> Result<()> {
    let message = message(sub)?;

    report!(
        "[{} {}] {}",
        Style::value(CURRENT_BRANCH),
        Style::value(HEAD),
        message
    );

    Ok(())
}

fn message(sub: &Subcommand) -> Result<&str> {
    let options = sub.options();

    let Some(message) = options.value_or("-m", "--message") else {
        status!(
            "{}",
            Style::hint("hint: Please supply the message using the -m option.")
        );
        bail!("no commit message");
    };

    if message.trim().is_empty() && !options.has_flag("--allow-empty-message") {
        bail!("Aborting commit due to empty commit message.");
    }

    Ok(message)
}
