//! Clean display name for a package
//!
//! Repositories are often named `go-foo` or `foo-go` while the package is
//! simply `foo`. The page suggests the clean name only when it is a valid
//! identifier-like token.

const PREFIX: &str = "go-";
const SUFFIX: &str = "-go";

/// Derive the name users should refer to the package by.
///
/// Returns an empty string when no safe alias exists.
pub fn clean_package_name(raw: &str) -> String {
    let stripped = raw
        .strip_prefix(PREFIX)
        .or_else(|| raw.strip_suffix(SUFFIX))
        .unwrap_or(raw);

    for (i, c) in stripped.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            continue;
        }
        if i > 0 && (c == '_' || c.is_ascii_digit()) {
            continue;
        }
        return String::new();
    }
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("go-redis", "redis")]
    #[case("protobuf-go", "protobuf")]
    #[case("go-2cool", "")] // digit at position 0 after strip
    #[case("simple_name", "simple_name")]
    #[case("bad!name", "")]
    #[case("yaml", "yaml")]
    #[case("v8js", "v8js")]
    #[case("go-go", "go")] // prefix wins, suffix not stripped again
    #[case("go-foo-go", "")] // only the prefix is stripped, '-' remains
    #[case("go-", "")]
    #[case("", "")]
    #[case("_private", "")]
    #[case("name_2", "name_2")]
    #[case("Mixed9Case", "Mixed9Case")]
    #[case("dotted.name", "")]
    #[case("ünïcode", "")]
    fn clean_package_name_strips_and_validates(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_package_name(raw), expected);
    }
}
