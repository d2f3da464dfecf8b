use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default location of descriptor files, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "internal/config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dependency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Per-language descriptor: metadata plus the ordered list of files to scaffold.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub scripts: IndexMap<String, String>,
}

impl ProjectConfig {
    /// Parses a descriptor document and checks its file entries.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or an entry that would leave the project directory.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: ProjectConfig = serde_json::from_str(data)?;
        config.check_entries()?;
        Ok(config)
    }

    /// Rejects entries that are empty or would not name a file inside the project directory.
    ///
    /// # Errors
    /// Returns an error naming the first offending entry.
    pub fn check_entries(&self) -> Result<()> {
        for entry in &self.files {
            check_entry(entry)?;
        }
        Ok(())
    }
}

fn check_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        bail!("invalid file entry: empty path");
    }
    let mut named = false;
    for comp in Path::new(entry).components() {
        match comp {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                bail!("invalid file entry {entry:?}: must stay inside the project directory");
            }
        }
    }
    if !named {
        bail!("invalid file entry {entry:?}: does not name a file");
    }
    Ok(())
}

pub fn descriptor_path(config_dir: &Path, language: &str) -> PathBuf {
    config_dir.join(format!("{language}.json"))
}

/// Reads `<config_dir>/<language>.json`.
///
/// # Errors
/// Returns an error if the file cannot be read, does not parse, or lists an unsafe entry.
pub fn load_descriptor(config_dir: &Path, language: &str) -> Result<ProjectConfig> {
    let path = descriptor_path(config_dir, language);
    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ProjectConfig = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config
        .check_entries()
        .with_context(|| format!("config file {}", path.display()))?;
    Ok(config)
}
