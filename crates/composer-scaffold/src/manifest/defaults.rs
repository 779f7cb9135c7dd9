//! Optional package defaults seeding the manifest (author, license, ...)

use crate::error::{Result, ScaffoldError};
use crate::identifier::PackageIdentifier;
use crate::manifest::Manifest;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Environment variable naming a defaults file when `--defaults` is not given
pub const DEFAULTS_ENV: &str = "PHP_PACKAGE_DEFAULTS";

/// A package author entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

impl Author {
    fn to_value(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("name".to_string(), Value::String(self.name.clone()));
        for (key, field) in [
            ("email", &self.email),
            ("homepage", &self.homepage),
            ("role", &self.role),
        ] {
            if let Some(value) = field {
                entry.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(entry)
    }
}

/// Fields copied into every generated composer.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDefaults {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "type")]
    pub package_type: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub authors: Vec<Author>,
}

impl PackageDefaults {
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content, path)
    }

    /// Load defaults from `explicit`, falling back to [`DEFAULTS_ENV`]
    ///
    /// Returns `None` when neither names a file.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(DEFAULTS_ENV) {
                Some(value) if !value.is_empty() => PathBuf::from(value),
                _ => return Ok(None),
            },
        };
        Self::load(&path).map(Some)
    }

    /// Write `name` and the configured fields into an empty manifest
    pub(crate) fn seed(&self, identifier: &PackageIdentifier, manifest: &mut Manifest) {
        manifest.set("name", Value::String(identifier.to_string()));

        if let Some(description) = &self.description {
            manifest.set("description", Value::String(description.clone()));
        }
        if let Some(package_type) = &self.package_type {
            manifest.set("type", Value::String(package_type.clone()));
        }
        if !self.keywords.is_empty() {
            manifest.set("keywords", Value::from(self.keywords.clone()));
        }
        if let Some(license) = &self.license {
            manifest.set("license", Value::String(license.clone()));
        }
        if !self.authors.is_empty() {
            let authors = self.authors.iter().map(Author::to_value).collect();
            manifest.set("authors", Value::Array(authors));
        }
    }
}
