//! `major.minor` version handling for the .NET SDK check.
//!
//! The SDK reports versions like `9.0.100` or `10.0.100-preview.1.25120.13`.
//! Only the first two components take part in the comparison.

/// Truncate a version string to its first two dot-separated components.
///
/// Strings with fewer components are returned unchanged.
pub fn major_minor(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// Parse the first two components of a version as integers.
fn parse_major_minor(version: &str) -> Option<(u64, u64)> {
    let mut parts = version.split('.');
    let major = parts.next()?.trim().parse().ok()?;
    let minor = parts.next()?.trim().parse().ok()?;
    Some((major, minor))
}

/// Returns true if `current` is at least `required`.
///
/// Major is compared first, then minor, both numerically. When either side
/// cannot be parsed this falls back to comparing the raw strings, so it
/// never fails; exotic version strings may then order incorrectly.
pub fn version_greater_equal(current: &str, required: &str) -> bool {
    match (parse_major_minor(current), parse_major_minor(required)) {
        (Some(current), Some(required)) => current >= required,
        _ => current >= required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_versions() {
        assert!(version_greater_equal("9.0", "9.0"));
    }

    #[test]
    fn test_newer_minor() {
        assert!(version_greater_equal("9.1", "9.0"));
    }

    #[test]
    fn test_older_major() {
        assert!(!version_greater_equal("8.9", "9.0"));
    }

    #[test]
    fn test_major_compared_numerically() {
        // A plain string comparison would put "10.0" before "9.5".
        assert!(version_greater_equal("10.0", "9.5"));
        assert!(!version_greater_equal("9.5", "10.0"));
    }

    #[test]
    fn test_minor_compared_numerically() {
        assert!(version_greater_equal("9.10", "9.9"));
        assert!(!version_greater_equal("9.0", "9.1"));
    }

    #[test]
    fn test_malformed_falls_back_to_string_comparison() {
        // "abc" > "9.0" lexicographically
        assert!(version_greater_equal("abc", "9.0"));
        assert!(!version_greater_equal("9.0", "abc"));
        // A single component cannot be split into major.minor
        assert!(version_greater_equal("9", "9"));
        assert!(!version_greater_equal("8", "9.0"));
        assert!(!version_greater_equal("", "9.0"));
    }

    #[test]
    fn test_extra_components_are_ignored() {
        assert!(version_greater_equal("9.0.100", "9.0"));
        assert!(!version_greater_equal("8.0.404", "9.0"));
    }

    #[test]
    fn test_major_minor() {
        assert_eq!(major_minor("9.0.100"), "9.0");
        assert_eq!(major_minor("10.0.100-preview.1.25120.13"), "10.0");
        assert_eq!(major_minor("9.0"), "9.0");
        assert_eq!(major_minor("9"), "9");
        assert_eq!(major_minor(""), "");
    }
}
