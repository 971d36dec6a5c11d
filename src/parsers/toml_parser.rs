use anyhow::anyhow;
use regex::Regex;

use crate::parsers::ManifestParser;

pub struct TomlParser;

impl TomlParser {
    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"(?m)^version\s*=\s*"([^"]+)""#)?)
    }
}

impl ManifestParser for TomlParser {
    fn filename() -> &'static str {
        "Cargo.toml"
    }

    /// Line-oriented extraction: first `version = "..."` line anchored at
    /// line start, captured value returned verbatim. No TOML-wide parsing.
    fn extract_version(contents: &str) -> anyhow::Result<String> {
        let regex = Self::version_match_regex()?;
        let captures = regex
            .captures(contents)
            .ok_or_else(|| anyhow!("No version line found"))?;
        Ok(captures[1].to_string())
    }
}
