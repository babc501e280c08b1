use anyhow::{Result, bail};

use super::first_missing;
use crate::parser::Subcommand;
use crate::{report, status};

/// Pretends to stage the given paths.
///
/// Every path must exist. Paths are echoed with `-v`/`--verbose` or
/// `-n`/`--dry-run`.
pub fn run(sub: &Subcommand) -> Result<()> {
    let paths = sub.arguments();

    if paths.is_empty() {
        report!("Nothing specified, nothing added.");
        status!("hint: Maybe you wanted to say 'subgit add .'?");
        return Ok(());
    }

    if let Some(missing) = first_missing(paths) {
        bail!("pathspec '{missing}' did not match any files");
    }

    let options = sub.options();
    if options.has_flag_or("-v", "--verbose") || options.has_flag_or("-n", "--dry-run") {
        for path in paths {
            report!("add '{path}'");
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands::tests::sub;
    use tempfile::TempDir;

    #[test]
    fn test_add_nothing_is_ok() {
        assert!(run(&sub(&["add"])).is_ok());
    }

    #[test]
    fn test_add_missing_path_fails() {
        let err = run(&sub(&["add", "definitely/not/here.txt"])).unwrap_err();
        assert!(err.to_string().contains("did not match any files"));
    }

    #[test]
    fn test_add_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "content").unwrap();
        let file = file.to_str().unwrap();

        assert!(run(&sub(&["add", "-v", file])).is_ok());
    }
}
