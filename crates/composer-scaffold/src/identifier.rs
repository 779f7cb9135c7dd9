//! Parsing of `vendor/package` names and namespace derivation

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// PHP namespace separator
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A package name split into its vendor and package halves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentifier {
    vendor: String,
    package: String,
}

impl PackageIdentifier {
    /// Split `raw` on its first `/`
    ///
    /// Everything before the slash is the vendor, everything after it the
    /// package. Both halves must keep at least one character once
    /// studly-cased, so the namespace prefix never has an empty segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (vendor, package) = trimmed
            .split_once('/')
            .ok_or_else(|| ScaffoldError::InvalidIdentifier(raw.to_string()))?;

        if studly(vendor).is_empty() || studly(package).is_empty() {
            return Err(ScaffoldError::InvalidIdentifier(raw.to_string()));
        }

        Ok(Self {
            vendor: vendor.to_string(),
            package: package.to_string(),
        })
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn studly_vendor(&self) -> String {
        studly(&self.vendor)
    }

    pub fn studly_package(&self) -> String {
        studly(&self.package)
    }

    /// Autoload namespace prefix, e.g. `foo/bar-baz` -> `Foo\BarBaz\`
    pub fn namespace_prefix(&self) -> String {
        format!(
            "{}{sep}{}{sep}",
            self.studly_vendor(),
            self.studly_package(),
            sep = NAMESPACE_SEPARATOR
        )
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.package)
    }
}

/// Studly-case a name part (`bar-baz` -> `BarBaz`)
///
/// Only `-`, `_` and whitespace break words. The first character of each
/// word is uppercased and the rest is kept as written (`PHPUnit-helpers` ->
/// `PHPUnitHelpers`, `foo.bar` -> `Foo.bar`).
pub fn studly(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .flat_map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars))
                .into_iter()
                .flatten()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_slash() {
        let id = PackageIdentifier::parse("acme/widgets").unwrap();
        assert_eq!(id.vendor(), "acme");
        assert_eq!(id.package(), "widgets");

        let nested = PackageIdentifier::parse("acme/widgets/extra").unwrap();
        assert_eq!(nested.vendor(), "acme");
        assert_eq!(nested.package(), "widgets/extra");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        for raw in [
            "acme",
            "",
            "/widgets",
            "acme/",
            "/",
            "   ",
            "---/widgets",
            "_/x",
            "acme/-_-",
        ] {
            let err = PackageIdentifier::parse(raw).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidIdentifier(_)),
                "expected InvalidIdentifier for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let id = PackageIdentifier::parse("  acme/widgets\n").unwrap();
        assert_eq!(id.to_string(), "acme/widgets");
    }

    #[test]
    fn test_namespace_prefix() {
        let id = PackageIdentifier::parse("foo/bar-baz").unwrap();
        assert_eq!(id.namespace_prefix(), "Foo\\BarBaz\\");

        let id = PackageIdentifier::parse("stillat/php_package").unwrap();
        assert_eq!(id.namespace_prefix(), "Stillat\\PhpPackage\\");
    }

    #[test]
    fn test_studly_keeps_raw_parts_untouched() {
        let id = PackageIdentifier::parse("my-vendor/some_lib").unwrap();
        assert_eq!(id.vendor(), "my-vendor");
        assert_eq!(id.studly_vendor(), "MyVendor");
        assert_eq!(id.studly_package(), "SomeLib");
    }

    #[test]
    fn test_studly_preserves_existing_capitals() {
        let id = PackageIdentifier::parse("ACME/widgets").unwrap();
        assert_eq!(id.namespace_prefix(), "ACME\\Widgets\\");

        let id = PackageIdentifier::parse("acme/PHPUnit-helpers").unwrap();
        assert_eq!(id.namespace_prefix(), "Acme\\PHPUnitHelpers\\");
    }

    #[test]
    fn test_studly_only_breaks_on_dashes_and_underscores() {
        let id = PackageIdentifier::parse("acme/foo.bar").unwrap();
        assert_eq!(id.namespace_prefix(), "Acme\\Foo.bar\\");
        assert_eq!(studly("foo bar-baz_qux"), "FooBarBazQux");
        assert_eq!(studly("--lead"), "Lead");
    }
}
