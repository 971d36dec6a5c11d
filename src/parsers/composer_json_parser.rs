use crate::parsers::{ManifestParser, extract_json_version};

pub struct ComposerJsonParser;

impl ManifestParser for ComposerJsonParser {
    fn filename() -> &'static str {
        "composer.json"
    }

    fn extract_version(contents: &str) -> anyhow::Result<String> {
        extract_json_version(contents)
    }
}
