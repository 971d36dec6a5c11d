use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use thiserror::Error;

static SEMVER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)$").expect("semver pattern is valid"));

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid semver format: {0}")]
    InvalidFormat(String),
    #[error("Invalid bump type: {0} (must be major, minor, or patch)")]
    InvalidBumpType(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpType {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            _ => Err(VersionError::InvalidBumpType(s.to_string())),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpType::Major => write!(f, "major"),
            BumpType::Minor => write!(f, "minor"),
            BumpType::Patch => write!(f, "patch"),
        }
    }
}

/// True exactly when the string is a recognized bump keyword, case-insensitively.
pub fn is_bump_type(s: &str) -> bool {
    BumpType::from_str(s).is_ok()
}

/// Parses a strict `MAJOR.MINOR.PATCH` string, with an optional leading `v`
/// and surrounding whitespace. Pre-release and build-metadata suffixes are
/// rejected. The resulting version always has empty pre/build fields.
pub fn parse(input: &str) -> Result<Version, VersionError> {
    let input = input.trim();
    let captures = SEMVER_REGEX
        .captures(input)
        .ok_or_else(|| VersionError::InvalidFormat(input.to_string()))?;

    let component = |index: usize| -> Result<u64, VersionError> {
        // The pattern guarantees digits; only u64 overflow can fail here.
        captures[index]
            .parse()
            .map_err(|_| VersionError::InvalidFormat(input.to_string()))
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Applies a bump rule, producing a new version without touching the input.
pub fn bump(version: &Version, bump_type: BumpType) -> Version {
    match bump_type {
        BumpType::Major => Version::new(version.major + 1, 0, 0),
        BumpType::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpType::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let version = parse("1.2.3").unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_v_prefix() {
        let version = parse("v1.2.3").unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let version = parse("  1.0.0\n").unwrap();
        assert_eq!(version, Version::new(1, 0, 0));
    }

    #[test]
    fn test_parse_leading_zeros_normalize() {
        let version = parse("01.02.03").unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_render_strips_v_prefix() {
        let version = parse("v2.0.0").unwrap();
        assert_eq!(version.to_string(), "2.0.0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("abc").unwrap_err();
        assert!(matches!(err, VersionError::InvalidFormat(ref s) if s == "abc"));
    }

    #[test]
    fn test_parse_rejects_two_components() {
        assert!(parse("1.0").is_err());
    }

    #[test]
    fn test_parse_rejects_four_components() {
        assert!(parse("1.0.0.0").is_err());
    }

    #[test]
    fn test_parse_rejects_prerelease() {
        assert!(parse("1.0.0-beta.1").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(parse("-1.0.0").is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_component() {
        // One past u64::MAX
        assert!(parse("18446744073709551616.0.0").is_err());
    }

    #[test]
    fn test_bump_patch() {
        let version = Version::new(1, 2, 3);
        assert_eq!(bump(&version, BumpType::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_minor_resets_patch() {
        let version = Version::new(1, 2, 3);
        assert_eq!(bump(&version, BumpType::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_major_resets_minor_and_patch() {
        let version = Version::new(1, 2, 3);
        assert_eq!(bump(&version, BumpType::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_does_not_mutate_input() {
        let version = Version::new(1, 2, 3);
        let _ = bump(&version, BumpType::Major);
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_bump_type_case_insensitive() {
        assert_eq!("MAJOR".parse::<BumpType>().unwrap(), BumpType::Major);
        assert_eq!("Minor".parse::<BumpType>().unwrap(), BumpType::Minor);
        assert_eq!("patch".parse::<BumpType>().unwrap(), BumpType::Patch);
    }

    #[test]
    fn test_bump_type_rejects_unknown_keyword() {
        let err = "premajor".parse::<BumpType>().unwrap_err();
        assert!(matches!(err, VersionError::InvalidBumpType(ref s) if s == "premajor"));
        assert!(
            err.to_string().contains("must be major, minor, or patch"),
            "missing guidance in: {}",
            err
        );
    }

    #[test]
    fn test_is_bump_type() {
        assert!(is_bump_type("major"));
        assert!(is_bump_type("minor"));
        assert!(is_bump_type("patch"));
        assert!(is_bump_type("PATCH"));
        assert!(!is_bump_type(""));
        assert!(!is_bump_type("1.0.0"));
        assert!(!is_bump_type("majors"));
    }

    #[test]
    fn test_bump_type_display_is_lowercase() {
        assert_eq!(BumpType::Major.to_string(), "major");
        assert_eq!(BumpType::Minor.to_string(), "minor");
        assert_eq!(BumpType::Patch.to_string(), "patch");
    }
}
