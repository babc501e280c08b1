use anyhow::{Context, Result, bail};

use crate::parser::Subcommand;
use crate::report;
use crate::ui::Style;

/// Pretends to clone `<url> [dir]`.
pub fn run(sub: &Subcommand) -> Result<()> {
    let arguments = sub.arguments();
    let Some(url) = arguments.first() else {
        bail!("You must specify a repository to clone.");
    };

    let dir = match arguments.get(1) {
        Some(dir) => dir.clone(),
        None => target_dir(url)?,
    };

    let options = sub.options();
    let depth = options
        .value("--depth")
        .map(|depth| {
            depth
                .parse::<u32>()
                .ok()
                .filter(|depth| *depth > 0)
                .with_context(|| format!("depth {depth} is not a positive number"))
        })
        .transpose()?;

    report!("Cloning into '{}'...", Style::value(&dir));
    if let Some(depth) = depth {
        report!("Fetching the last {depth} commit(s) only");
    }
    if let Some(branch) = options.value_or("-b", "--branch") {
        report!("Checking out branch '{}'", Style::value(branch));
    }

    Ok(())
}

/// Derives the checkout directory from a repository url.
///
/// `https://host/org/repo.git` becomes `repo`.
fn target_dir(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() {
        bail!("cannot guess a directory name from '{url}'");
    }

    Ok(name.to_string())
}
