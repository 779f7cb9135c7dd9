//! End-to-end package generation

use crate::error::{Result, ScaffoldError};
use crate::host::TemplateHost;
use crate::identifier::PackageIdentifier;
use crate::manifest::{Manifest, ManifestBuilder, PackageDefaults};
use crate::options::{OptionSet, DEFAULT_PHP_VERSION};
use crate::paths::PathDecision;
use crate::travis::Prompter;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Raw `vendor/package` argument
    pub package: String,

    /// Minimum PHP version constraint, recorded verbatim
    pub php_version: String,

    pub options: OptionSet,

    /// Directory receiving composer.json
    pub output_dir: PathBuf,

    pub defaults: Option<PackageDefaults>,
}

impl GenerateRequest {
    pub fn new(package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            php_version: DEFAULT_PHP_VERSION.to_string(),
            options: OptionSet::default(),
            output_dir: output_dir.into(),
            defaults: None,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct Generated {
    pub identifier: PackageIdentifier,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub paths: PathDecision,
}

/// Generate a package: share variables, build the manifest, hand path
/// instructions to the host and save composer.json
///
/// Nothing is written when the package name is invalid or a prompt fails.
pub async fn generate<H, P>(
    request: &GenerateRequest,
    host: &mut H,
    prompter: &mut P,
) -> Result<Generated>
where
    H: TemplateHost + ?Sized,
    P: Prompter + ?Sized,
{
    let identifier = PackageIdentifier::parse(&request.package)?;

    host.share("vendor", Value::String(identifier.vendor().to_string()));
    host.share("package", Value::String(identifier.package().to_string()));

    let manifest = ManifestBuilder::new(&identifier, &request.php_version, request.options)
        .with_defaults(request.defaults.as_ref())
        .build(&mut *host, &mut *prompter)?;

    let paths = PathDecision::resolve(&request.options);
    paths.apply(host);

    fs::create_dir_all(&request.output_dir)
        .await
        .map_err(|source| ScaffoldError::OutputWriteFailure {
            path: request.output_dir.clone(),
            source,
        })?;
    let manifest_path = manifest.save_in(&request.output_dir).await?;

    host.line(
        "Your package was generated! Make sure to set the description field in your composer.json file!",
    );

    Ok(Generated {
        identifier,
        manifest,
        manifest_path,
        paths,
    })
}
