//! Resolved options for one generation run

use std::fmt;

/// Default minimum PHP version constraint
pub const DEFAULT_PHP_VERSION: &str = ">=5.5.9";

/// Autoloading mechanism written to the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoloader {
    Psr0,
    #[default]
    Psr4,
}

impl Autoloader {
    /// Interpret the `--psr` option value
    ///
    /// Only `psr0` selects PSR-0. Every other value, including typos,
    /// falls back to PSR-4 without an error.
    pub fn from_option(value: &str) -> Self {
        if value == "psr0" {
            Autoloader::Psr0
        } else {
            Autoloader::Psr4
        }
    }

    /// Key used under `autoload` in composer.json
    pub fn manifest_key(&self) -> &'static str {
        match self {
            Autoloader::Psr0 => "psr-0",
            Autoloader::Psr4 => "psr-4",
        }
    }
}

impl fmt::Display for Autoloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_key())
    }
}

/// Feature switches for the generated package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionSet {
    /// Gather CI versions and keep `.travis.yml`
    pub travis: bool,

    /// Add PHPUnit dev dependencies and keep the test scaffold
    pub phpunit: bool,

    pub psr: Autoloader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psr0_selects_psr0() {
        assert_eq!(Autoloader::from_option("psr0"), Autoloader::Psr0);
        assert_eq!(Autoloader::Psr0.manifest_key(), "psr-0");
    }

    #[test]
    fn test_unrecognized_values_fall_back_to_psr4() {
        for value in ["psr4", "", "PSR0", "psr-0", "classmap"] {
            assert_eq!(Autoloader::from_option(value), Autoloader::Psr4);
        }
        assert_eq!(Autoloader::Psr4.to_string(), "psr-4");
    }

    #[test]
    fn test_defaults() {
        let options = OptionSet::default();
        assert!(!options.travis);
        assert!(!options.phpunit);
        assert_eq!(options.psr, Autoloader::Psr4);
    }
}
