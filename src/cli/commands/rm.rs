use anyhow::{Result, bail};

use super::first_missing;
use crate::parser::Subcommand;
use crate::report;

/// Pretends to remove paths. Nothing on disk is touched.
pub fn run(sub: &Subcommand) -> Result<()> {
    let paths = sub.arguments();

    if paths.is_empty() {
        bail!("No pathspec was given. Which files should I remove?");
    }

    if let Some(missing) = first_missing(paths) {
        bail!("pathspec '{missing}' did not match any files");
    }

    for path in paths {
        report!("rm '{path}'");
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
    fn test_rm_requires_paths() {
        let err = run(&sub(&["rm", "-r"])).unwrap_err();
        assert!(err.to_string().contains("No pathspec"));
    }

    #[test]
    fn test_rm_leaves_files_alone() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("keep.txt");
        std::fs::write(&file, "content").unwrap();

        run(&sub(&["rm", "--cached", file.to_str().unwrap()])).unwrap();
        assert!(file.exists());
    }
}
