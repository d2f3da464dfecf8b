use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::{Dependency, ProjectConfig};
use crate::languages::LanguageSpec;

/// Validated user request, built once from command-line input.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub language: &'static LanguageSpec,
    pub project_type: String,
    pub name: String,
    pub output: PathBuf,
    pub config_dir: PathBuf,
}

impl ScaffoldRequest {
    pub fn project_dir(&self) -> PathBuf {
        self.output.join(&self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub language: String,
    pub language_name: String,
    pub project_type: String,
    pub name: String,
    pub location: PathBuf,
    pub files: Vec<String>,
    pub descriptor: DescriptorInfo,
    pub dependencies: Vec<Dependency>,
    pub scripts: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescriptorInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

impl ScaffoldReport {
    pub fn new(req: &ScaffoldRequest, config: &ProjectConfig) -> Self {
        ScaffoldReport {
            language: req.language.id.clone(),
            language_name: req.language.name.clone(),
            project_type: req.project_type.clone(),
            name: req.name.clone(),
            location: req.project_dir(),
            files: config.files.clone(),
            descriptor: DescriptorInfo {
                name: config.name.clone(),
                kind: config.kind.clone(),
                version: config.version.clone(),
                description: config.description.clone(),
                author: config.author.clone(),
            },
            dependencies: config.dependencies.clone(),
            scripts: config.scripts.clone(),
        }
    }
}
