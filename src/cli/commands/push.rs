use anyhow::Result;

use super::CURRENT_BRANCH;
use crate::parser::Subcommand;
use crate::ui::Style;
use crate::{report, warning};

const DEFAULT_REMOTE: &str = "origin";

/// Pushes nothing: `push [remote] [branch]`.
pub fn run(sub: &Subcommand) -> Result<()> {
    let (remote, branch) = target(sub);

    if sub.options().has_flag_or("-f", "--force") {
        warning!(
            "{} forcing update of '{}' on '{}'",
            Style::warning("warning:"),
            branch,
            remote
        );
    }

    report!("Everything up-to-date");
    Ok(())
}

fn target(sub: &Subcommand) -> (&str, &str) {
    let arguments = sub.arguments();
    let remote = arguments.first().map_or(DEFAULT_REMOTE, String::as_str);
    let branch = arguments.get(1).map_or(CURRENT_BRANCH, String::as_str);
    (remote, branch)
}
