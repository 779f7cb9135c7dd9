//! Which scaffold paths are relocated or left out of the rendered package

use crate::host::TemplateHost;
use crate::options::{Autoloader, OptionSet};

/// Placeholder kept in `src/` so the directory exists in the template
pub const SOURCE_PLACEHOLDER: &str = "src/newup.keep";

/// Where the placeholder moves for PSR-0 packages
///
/// The renderer strips `newup.keep` files, so this leaves an empty
/// `src/<Vendor>/<Package>/` directory behind.
pub const PSR0_PLACEHOLDER_TARGET: &str =
    "src/{{ vendor|studly }}/{{ package|studly }}/newup.keep";

pub const PHPUNIT_PATHS: &[&str] = &["phpunit.xml", "tests/*"];

pub const TRAVIS_PATHS: &[&str] = &[".travis.yml"];

/// Rename and exclusion instructions derived from the options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDecision {
    pub transforms: Vec<(&'static str, &'static str)>,
    pub ignored: Vec<&'static str>,
}

impl PathDecision {
    pub fn resolve(options: &OptionSet) -> Self {
        let mut decision = Self::default();

        if options.psr == Autoloader::Psr0 {
            decision
                .transforms
                .push((SOURCE_PLACEHOLDER, PSR0_PLACEHOLDER_TARGET));
        }

        if !options.phpunit {
            decision.ignored.extend_from_slice(PHPUNIT_PATHS);
        }

        if !options.travis {
            decision.ignored.extend_from_slice(TRAVIS_PATHS);
        }

        decision
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty() && self.ignored.is_empty()
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored.contains(&path)
    }

    /// Hand the instructions to the rendering host
    pub fn apply<H: TemplateHost + ?Sized>(&self, host: &mut H) {
        for (source, target) in &self.transforms {
            host.transform_path(source, target);
        }
        if !self.ignored.is_empty() {
            host.ignore_paths(&self.ignored);
        }
    }
}
