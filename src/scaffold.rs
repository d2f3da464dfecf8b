use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::descriptor::ProjectConfig;

/// Creates `project_dir` and one empty file per descriptor entry, in order.
///
/// `on_created` is invoked with each entry right after its file exists.
/// The first failure aborts; files created before it are left on disk.
///
/// # Errors
/// Returns an error if the project directory, a parent directory, or a file cannot be created.
pub fn create_project<F>(
    project_dir: &Path,
    config: &ProjectConfig,
    mut on_created: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&str),
{
    fs::create_dir_all(project_dir).with_context(|| {
        format!(
            "failed to create project directory {}",
            project_dir.display()
        )
    })?;

    let mut created = Vec::with_capacity(config.files.len());
    for entry in &config.files {
        let path = project_dir.join(entry);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory for {entry}"))?;
        }
        // Truncates an existing file, matching a fresh scaffold.
        fs::File::create(&path).with_context(|| format!("failed to create file {entry}"))?;
        on_created(entry);
        created.push(path);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_with(files: &[&str]) -> ProjectConfig {
        ProjectConfig {
            files: files.iter().map(|s| (*s).to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn creates_empty_files_and_intermediate_dirs() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");
        let mut seen = Vec::new();
        let created = create_project(
            &project,
            &config_with(&["src/main.go", "README.md"]),
            |f| seen.push(f.to_string()),
        )
        .unwrap();

        assert_eq!(seen, ["src/main.go", "README.md"]);
        assert_eq!(created.len(), 2);
        assert!(project.join("src").is_dir());
        for rel in ["src/main.go", "README.md"] {
            let md = fs::metadata(project.join(rel)).unwrap();
            assert!(md.is_file());
            assert_eq!(md.len(), 0);
        }
        assert_eq!(fs::read_dir(&project).unwrap().count(), 2);
    }

    #[test]
    fn empty_file_list_still_creates_project_dir() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("a/b/empty");
        let created = create_project(&project, &config_with(&[]), |_| {}).unwrap();
        assert!(created.is_empty());
        assert!(project.is_dir());
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("p");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("notes.txt"), "old").unwrap();
        create_project(&project, &config_with(&["notes.txt"]), |_| {}).unwrap();
        assert_eq!(fs::metadata(project.join("notes.txt")).unwrap().len(), 0);
    }

    #[test]
    fn stops_at_first_failure_and_keeps_earlier_files() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("p");
        // "blocker" becomes a file, so "blocker/inner.txt" cannot get its parent dir.
        let cfg = config_with(&["first.txt", "blocker", "blocker/inner.txt", "never.txt"]);
        let mut seen = Vec::new();
        let err = create_project(&project, &cfg, |f| seen.push(f.to_string())).unwrap_err();

        assert!(
            err.to_string()
                .contains("failed to create directory for blocker/inner.txt"),
            "{err}"
        );
        assert_eq!(seen, ["first.txt", "blocker"]);
        assert!(project.join("first.txt").is_file());
        assert!(!project.join("never.txt").exists());
    }

    #[test]
    fn project_dir_failure_is_reported() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "x").unwrap();
        let err = create_project(&file.join("proj"), &config_with(&["a"]), |_| {}).unwrap_err();
        assert!(
            err.to_string().starts_with("failed to create project directory"),
            "{err}"
        );
    }
}
