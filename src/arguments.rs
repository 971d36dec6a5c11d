use clap::Parser;

const AFTER_HELP: &str = "\
Bump types:
  major    Increment major version (1.0.0 -> 2.0.0)
  minor    Increment minor version (1.0.0 -> 1.1.0)
  patch    Increment patch version (1.0.0 -> 1.0.1) [default]

Examples:
  bump 1.0.0 patch         # Output: 1.0.1
  bump 1.0.0 minor         # Output: 1.1.0
  bump 1.0.0 major         # Output: 2.0.0
  bump 1.0.0               # Output: 1.0.1 (default: patch)
  echo \"2.3.4\" | bump minor   # Output: 2.4.0
  bump patch               # Reads version from package.json/composer.json/Cargo.toml";

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bump", after_help = AFTER_HELP)]
pub struct Arguments {
    /// Directory searched for manifest files when no version is given
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
    /// Version string and/or bump type (major, minor, patch), in either order
    pub tokens: Vec<String>,
}
