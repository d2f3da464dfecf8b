#![allow(clippy::must_use_candidate)]

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSpec {
    /// Identifier accepted on the command line and used as the descriptor file stem
    pub id: String,
    /// Human-readable name shown in help and error output
    pub name: String,
}

pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
    by_id: HashMap<String, usize>,
}

impl LanguageRegistry {
    fn from_specs(specs: Vec<LanguageSpec>) -> Self {
        let by_id = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.id.to_ascii_lowercase(), i))
            .collect();
        Self { specs, by_id }
    }
}

static EMBEDDED_LANG_JSON: &str = include_str!("../assets/languages.json");

pub static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(|| {
    let specs: Vec<LanguageSpec> =
        serde_json::from_str(EMBEDDED_LANG_JSON).expect("invalid embedded languages.json");
    LanguageRegistry::from_specs(specs)
});

pub fn language_registry() -> &'static [LanguageSpec] {
    &REGISTRY.specs
}

/// Case-insensitive lookup by identifier.
pub fn find_language(id: &str) -> Option<&'static LanguageSpec> {
    let idx = *REGISTRY.by_id.get(&id.to_ascii_lowercase())?;
    Some(&language_registry()[idx])
}

/// Display names joined for help and error text, e.g. `Go, TS, C`.
pub fn supported_display_list() -> String {
    language_registry()
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves a user-supplied language, failing with the supported list.
///
/// # Errors
/// Returns an error if the identifier is not in the language table.
pub fn validate_language(raw: &str) -> Result<&'static LanguageSpec> {
    match find_language(raw) {
        Some(spec) => Ok(spec),
        None => bail!(
            "Unsupported language: {} (supported languages: {})",
            raw.to_ascii_lowercase(),
            supported_display_list()
        ),
    }
}
