use std::io::{BufRead, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use thiserror::Error;

use crate::parsers;
use crate::version::{self, BumpType};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Too many arguments: expected at most 2, got {0}")]
    TooManyArguments(usize),
}

/// Resolves the effective version string and bump type from the positional
/// tokens. The `piped` closure supplies the stdin line lazily so it is only
/// consumed in the branches that need it.
///
/// Token precedence: an explicit version token always wins; otherwise piped
/// input, then a manifest found in `dir`. The bump type defaults to patch
/// unless a token names one.
pub fn resolve(
    tokens: &[String],
    piped: impl FnOnce() -> Option<String>,
    dir: &Path,
) -> Result<(String, BumpType)> {
    match tokens {
        [] => {
            let version = piped_or_manifest(piped, dir)?;
            Ok((version, BumpType::Patch))
        }
        [token] => {
            if let Ok(bump_type) = token.parse::<BumpType>() {
                let version = piped_or_manifest(piped, dir)?;
                Ok((version, bump_type))
            } else {
                Ok((token.clone(), BumpType::Patch))
            }
        }
        [first, second] => {
            if let Ok(bump_type) = first.parse::<BumpType>() {
                Ok((second.clone(), bump_type))
            } else {
                let bump_type = second.parse::<BumpType>()?;
                Ok((first.clone(), bump_type))
            }
        }
        _ => Err(ResolveError::TooManyArguments(tokens.len()).into()),
    }
}

fn piped_or_manifest(piped: impl FnOnce() -> Option<String>, dir: &Path) -> Result<String> {
    if let Some(version) = piped() {
        debug!("Using version from piped input: {}", version);
        return Ok(version);
    }
    debug!("No piped input, searching manifests in '{}'", dir.display());
    parsers::detect_version(dir).context("No version provided")
}

/// Reads the first line of piped stdin, trimmed. Returns None when stdin is
/// an interactive terminal, unreadable, or yields an empty line; callers fall
/// through to the manifest source in that case.
pub fn read_piped_version() -> Option<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = line.trim();
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        }
    }
}

/// Full pipeline: resolve inputs, parse, bump, render.
pub fn run(tokens: &[String], dir: &Path) -> Result<String> {
    let (version_str, bump_type) = resolve(tokens, read_piped_version, dir)?;
    let current = version::parse(&version_str)?;
    let bumped = version::bump(&current, bump_type);
    debug!("Bumping {} -> {} ({})", current, bumped, bump_type);
    Ok(bumped.to_string())
}
