//! composer.json assembly and persistence

pub mod defaults;

use crate::error::{Result, ScaffoldError};
use crate::host::TemplateHost;
use crate::identifier::PackageIdentifier;
use crate::options::OptionSet;
use crate::travis::{Prompter, TravisCollector};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

pub use defaults::{Author, PackageDefaults, DEFAULTS_ENV};

/// File name of the generated manifest
pub const MANIFEST_FILE: &str = "composer.json";

/// Dev dependencies added when PHPUnit support is requested
pub const PHPUNIT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("mockery/mockery", "~0.9.2"),
    ("phpunit/phpunit", "~4.0"),
];

/// Directory mapped to the package namespace
pub const SOURCE_DIR: &str = "src/";

/// Ordered composer.json document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed value, replacing any previous one in place
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Serialize with composer's layout: four-space indent, trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields.serialize(&mut serializer)?;
        buf.push(b'\n');
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the manifest to `path` in a single write
    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json)
            .await
            .map_err(|source| ScaffoldError::OutputWriteFailure {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write `composer.json` inside `dir`, returning the file path
    pub async fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        self.save(&path).await?;
        Ok(path)
    }
}

/// Assembles the manifest for one package
#[derive(Debug, Clone)]
pub struct ManifestBuilder<'a> {
    identifier: &'a PackageIdentifier,
    php_constraint: &'a str,
    options: OptionSet,
    defaults: Option<&'a PackageDefaults>,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(
        identifier: &'a PackageIdentifier,
        php_constraint: &'a str,
        options: OptionSet,
    ) -> Self {
        Self {
            identifier,
            php_constraint,
            options,
            defaults: None,
        }
    }

    pub fn with_defaults(mut self, defaults: Option<&'a PackageDefaults>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the manifest
    ///
    /// When Travis support is enabled the collector runs against `prompter`
    /// and its result is shared with the host as `travisVersions`. Only
    /// prompt failures can make this fail.
    pub fn build<H, P>(&self, host: &mut H, prompter: &mut P) -> Result<Manifest>
    where
        H: TemplateHost + ?Sized,
        P: Prompter + ?Sized,
    {
        let mut manifest = Manifest::new();

        if let Some(defaults) = self.defaults {
            defaults.seed(self.identifier, &mut manifest);
        }

        let mut require = Map::new();
        require.insert(
            "php".to_string(),
            Value::String(self.php_constraint.to_string()),
        );

        let mut require_dev = Map::new();
        if self.options.phpunit {
            for (name, constraint) in PHPUNIT_DEV_DEPENDENCIES {
                require_dev.insert(name.to_string(), Value::String(constraint.to_string()));
            }
            host.line("Added 'mockery/mockery' and 'phpunit/phpunit' to composer dev dependencies.");
        }

        if self.options.travis {
            let versions = TravisCollector::collect(prompter)?;
            host.line("TravisCI information gathered.");
            host.share("travisVersions", serde_json::to_value(&versions)?);
        }

        manifest.set("require", Value::Object(require));
        manifest.set("require-dev", Value::Object(require_dev));

        let autoloader = self.options.psr;
        let mut mapping = Map::new();
        mapping.insert(
            self.identifier.namespace_prefix(),
            Value::String(SOURCE_DIR.to_string()),
        );
        let mut autoload = Map::new();
        autoload.insert(autoloader.manifest_key().to_string(), Value::Object(mapping));
        host.line(&format!("Using {} autoloader.", autoloader));

        manifest.set("autoload", Value::Object(autoload));
        manifest.set("minimum-stability", Value::String("stable".to_string()));

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RenderPlan;
    use crate::options::Autoloader;
    use crate::travis::{DeclinePrompter, ScriptedPrompter};
    use serde_json::json;

    fn build(raw: &str, php: &str, options: OptionSet) -> (Manifest, RenderPlan) {
        let id = PackageIdentifier::parse(raw).unwrap();
        let mut plan = RenderPlan::new();
        let manifest = ManifestBuilder::new(&id, php, options)
            .build(&mut plan, &mut DeclinePrompter)
            .unwrap();
        (manifest, plan)
    }

    #[test]
    fn test_acme_widgets_with_phpunit() {
        let options = OptionSet {
            phpunit: true,
            ..Default::default()
        };
        let (manifest, _) = build("acme/widgets", ">=7.0", options);

        assert_eq!(
            manifest.as_value(),
            json!({
                "require": {"php": ">=7.0"},
                "require-dev": {
                    "mockery/mockery": "~0.9.2",
                    "phpunit/phpunit": "~4.0"
                },
                "autoload": {"psr-4": {"Acme\\Widgets\\": "src/"}},
                "minimum-stability": "stable"
            })
        );
        assert_eq!(
            manifest.keys(),
            vec!["require", "require-dev", "autoload", "minimum-stability"]
        );
    }

    #[test]
    fn test_without_phpunit_require_dev_is_empty_object() {
        let (manifest, _) = build("acme/widgets", ">=5.5.9", OptionSet::default());
        assert_eq!(manifest.get("require-dev"), Some(&json!({})));
    }

    #[test]
    fn test_php_constraint_is_passed_through() {
        let (manifest, _) = build("acme/widgets", "not even ^a constraint", OptionSet::default());
        assert_eq!(
            manifest.get("require"),
            Some(&json!({"php": "not even ^a constraint"}))
        );
    }

    #[test]
    fn test_psr0_autoload_key() {
        let options = OptionSet {
            psr: Autoloader::Psr0,
            ..Default::default()
        };
        let (manifest, plan) = build("foo/bar-baz", ">=5.5.9", options);
        assert_eq!(
            manifest.get("autoload"),
            Some(&json!({"psr-0": {"Foo\\BarBaz\\": "src/"}}))
        );
        assert!(plan.messages.contains(&"Using psr-0 autoloader.".to_string()));
    }

    #[test]
    fn test_travis_shares_collected_versions() {
        let id = PackageIdentifier::parse("acme/widgets").unwrap();
        let options = OptionSet {
            travis: true,
            ..Default::default()
        };
        let mut plan = RenderPlan::new();
        let mut prompter = ScriptedPrompter::new([true, false, true, true, false], ["7.1", "7.2"]);

        ManifestBuilder::new(&id, ">=7.0", options)
            .build(&mut plan, &mut prompter)
            .unwrap();

        assert_eq!(
            plan.variables["travisVersions"],
            json!([
                {"version": "7.1", "allowFailure": false},
                {"version": "7.2", "allowFailure": true}
            ])
        );
    }

    #[test]
    fn test_no_travis_does_not_prompt() {
        let id = PackageIdentifier::parse("acme/widgets").unwrap();
        let mut plan = RenderPlan::new();
        let mut prompter = ScriptedPrompter::new([], Vec::<String>::new());

        ManifestBuilder::new(&id, ">=7.0", OptionSet::default())
            .build(&mut plan, &mut prompter)
            .unwrap();

        assert!(prompter.asked().is_empty());
        assert!(!plan.variables.contains_key("travisVersions"));
    }

    #[test]
    fn test_defaults_precede_core_sections() {
        let id = PackageIdentifier::parse("acme/widgets").unwrap();
        let defaults = PackageDefaults {
            description: Some("Widgets for everyone".to_string()),
            license: Some("MIT".to_string()),
            ..Default::default()
        };
        let mut plan = RenderPlan::new();

        let manifest = ManifestBuilder::new(&id, ">=7.0", OptionSet::default())
            .with_defaults(Some(&defaults))
            .build(&mut plan, &mut DeclinePrompter)
            .unwrap();

        assert_eq!(
            manifest.keys(),
            vec![
                "name",
                "description",
                "license",
                "require",
                "require-dev",
                "autoload",
                "minimum-stability"
            ]
        );
    }

    #[test]
    fn test_json_layout() {
        let options = OptionSet {
            phpunit: true,
            ..Default::default()
        };
        let (manifest, _) = build("acme/widgets", ">=7.0", options);
        let json = manifest.to_json_string().unwrap();

        let expected = r#"{
    "require": {
        "php": ">=7.0"
    },
    "require-dev": {
        "mockery/mockery": "~0.9.2",
        "phpunit/phpunit": "~4.0"
    },
    "autoload": {
        "psr-4": {
            "Acme\\Widgets\\": "src/"
        }
    },
    "minimum-stability": "stable"
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_identical_inputs_give_identical_bytes() {
        let options = OptionSet {
            phpunit: true,
            psr: Autoloader::Psr0,
            ..Default::default()
        };
        let (first, _) = build("acme/widgets", ">=7.0", options);
        let (second, _) = build("acme/widgets", ">=7.0", options);
        assert_eq!(
            first.to_json_string().unwrap(),
            second.to_json_string().unwrap()
        );
    }

    #[tokio::test]
    async fn test_save_in_writes_composer_json() {
        let dir = tempfile::tempdir().unwrap();
        let (manifest, _) = build("acme/widgets", ">=7.0", OptionSet::default());

        let path = manifest.save_in(dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("composer.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, manifest.to_json_string().unwrap());
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (manifest, _) = build("acme/widgets", ">=7.0", OptionSet::default());

        let err = manifest
            .save_in(&dir.path().join("does/not/exist"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::OutputWriteFailure { .. }));
    }
}
