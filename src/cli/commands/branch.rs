use anyhow::{Result, bail};

use super::CURRENT_BRANCH;
use crate::parser::Subcommand;
use crate::report;
use crate::ui::Style;

#[derive(Debug, PartialEq, Eq)]
enum BranchOp<'a> {
    List,
    Create(&'a str),
    Delete(&'a str),
}

/// Lists, creates or deletes branches.
pub fn run(sub: &Subcommand) -> Result<()> {
    match plan(sub)? {
        BranchOp::List => report!("* {}", Style::value(CURRENT_BRANCH)),
        BranchOp::Create(name) => report!("Created branch '{}'", Style::value(name)),
        BranchOp::Delete(name) => report!("Deleted branch {} (was {}).", name, super::HEAD),
    }
    Ok(())
}

fn plan(sub: &Subcommand) -> Result<BranchOp<'_>> {
    let name = sub.arguments().first().map(String::as_str);

    if sub.options().has_flag_or("-d", "--delete") {
        let Some(name) = name else {
            bail!("branch name required");
        };
        if name == CURRENT_BRANCH {
            bail!("cannot delete branch '{name}' used by the working tree");
        }
        return Ok(BranchOp::Delete(name));
    }

    match name {
        None => Ok(BranchOp::List),
        Some(name) if !is_valid_name(name) => bail!("'{name}' is not a valid branch name"),
        Some(name) if name == CURRENT_BRANCH => {
            bail!("a branch named '{name}' already exists")
        }
        Some(name) => Ok(BranchOp::Create(name)),
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.contains("..")
        && !name.chars().any(|c| c.is_whitespace() || "~^:?*[\\".contains(c))
}
