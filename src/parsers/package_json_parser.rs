use crate::parsers::{ManifestParser, extract_json_version};

pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn filename() -> &'static str {
        "package.json"
    }

    fn extract_version(contents: &str) -> anyhow::Result<String> {
        extract_json_version(contents)
    }
}
