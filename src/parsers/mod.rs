use anyhow::Result;
use log::debug;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod composer_json_parser;
pub mod package_json_parser;
pub mod toml_parser;

use composer_json_parser::ComposerJsonParser;
use package_json_parser::PackageJsonParser;
use toml_parser::TomlParser;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("No manifest file found with a version field in {0}")]
    NoManifestFound(String),
}

pub trait ManifestParser {
    fn filename() -> &'static str;
    fn extract_version(contents: &str) -> Result<String>;
}

/// Searches `dir` for a known manifest file carrying a version string.
///
/// Candidates are probed in a fixed order (package.json, composer.json,
/// Cargo.toml) and the first non-empty extracted version wins. An unreadable
/// or unextractable candidate falls through to the next one; only exhausting
/// every candidate is an error. The returned string is unvalidated, semver
/// checking happens downstream.
pub fn detect_version(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if let Some(version) = try_candidate::<PackageJsonParser>(path) {
        return Ok(version);
    }
    if let Some(version) = try_candidate::<ComposerJsonParser>(path) {
        return Ok(version);
    }
    if let Some(version) = try_candidate::<TomlParser>(path) {
        return Ok(version);
    }
    Err(ParsingError::NoManifestFound(path.to_string_lossy().to_string()).into())
}

fn try_candidate<P: ManifestParser>(dir: &Path) -> Option<String> {
    let file = dir.join(P::filename());
    debug!("Checking file: '{}'", file.display());
    let contents = match std::fs::read_to_string(&file) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Skipping '{}': {}", file.display(), e);
            return None;
        }
    };
    match P::extract_version(&contents) {
        Ok(version) if !version.is_empty() => {
            debug!("Found version {} in '{}'", version, file.display());
            Some(version)
        }
        Ok(_) => {
            debug!("No version field in '{}'", file.display());
            None
        }
        Err(e) => {
            debug!("Skipping '{}': {}", file.display(), e);
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonManifest {
    #[serde(default)]
    version: Option<String>,
}

/// Shared extractor for the JSON manifests: a missing or null `version` field
/// yields an empty string (a skippable non-result), while malformed JSON or a
/// non-string `version` value is an extraction error.
pub(crate) fn extract_json_version(contents: &str) -> Result<String> {
    let manifest: JsonManifest = serde_json::from_str(contents)?;
    Ok(manifest.version.unwrap_or_default())
}
