//! Composer Scaffold - core library for generating PHP packages
//!
//! Given a `vendor/package` name and a few switches, this library builds the
//! package's `composer.json` and decides which scaffold files the template
//! renderer should relocate or leave out.
//!
//! # Architecture
//!
//! - **Core operations** - identifier parsing, manifest building, path policy
//! - **Workflow** - [`generate`] runs the pipeline against a [`TemplateHost`]
//!   (the rendering collaborator) and a [`Prompter`] (the answer source)
//! - **CLI/TUI interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use composer_scaffold::{generate, DeclinePrompter, GenerateRequest, RenderPlan};
//!
//! let mut request = GenerateRequest::new("acme/widgets", "out");
//! request.options.phpunit = true;
//!
//! let mut plan = RenderPlan::new();
//! let generated = generate(&request, &mut plan, &mut DeclinePrompter).await?;
//! ```

pub mod error;
pub mod generator;
pub mod host;
pub mod identifier;
pub mod manifest;
pub mod options;
pub mod paths;
pub mod travis;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use generator::{generate, GenerateRequest, Generated};
pub use host::{RenderPlan, TemplateHost};
pub use identifier::PackageIdentifier;
pub use manifest::{Manifest, ManifestBuilder, PackageDefaults};
pub use options::{Autoloader, OptionSet, DEFAULT_PHP_VERSION};
pub use paths::PathDecision;
pub use travis::{CiVersionEntry, DeclinePrompter, Prompter, ScriptedPrompter, TravisCollector};

#[cfg(feature = "tui")]
pub use tui::run;
