//! Charm-style CLI prompts using cliclack

use crate::generator::{generate, GenerateRequest};
use crate::host::{RenderPlan, TemplateHost};
use crate::manifest::PackageDefaults;
use crate::options::{Autoloader, OptionSet, DEFAULT_PHP_VERSION};
use crate::travis::{DeclinePrompter, Prompter};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io;
use std::path::PathBuf;

/// CLI arguments for generating a package
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Package name in vendor/package form
    pub package: String,

    /// Minimum PHP version constraint
    pub php_version: String,

    /// Gather Travis CI versions
    pub travis: bool,

    /// Add PHPUnit support
    pub phpunit: bool,

    /// Autoloader option value (psr0 or psr4)
    pub psr: String,

    /// Directory receiving composer.json
    pub output_dir: PathBuf,

    /// Package defaults file
    pub defaults: Option<PathBuf>,

    /// Write the render plan as JSON to this path
    pub plan: Option<PathBuf>,

    /// Auto-decline all prompts (non-interactive mode)
    pub yes: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            package: String::new(),
            php_version: DEFAULT_PHP_VERSION.to_string(),
            travis: false,
            phpunit: false,
            psr: "psr4".to_string(),
            output_dir: PathBuf::from("."),
            defaults: None,
            plan: None,
            yes: false,
        }
    }
}

/// Prompter backed by cliclack confirm/input widgets
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(prompt).initial_value(default).interact()
    }

    fn input(&mut self, prompt: &str) -> io::Result<String> {
        cliclack::input(prompt).interact()
    }
}

/// Host recording a render plan while echoing messages to the terminal
#[derive(Debug, Default)]
pub struct ConsoleHost {
    pub plan: RenderPlan,
}

impl TemplateHost for ConsoleHost {
    fn share(&mut self, key: &str, value: Value) {
        self.plan.share(key, value);
    }

    fn ignore_paths(&mut self, patterns: &[&str]) {
        self.plan.ignore_paths(patterns);
    }

    fn transform_path(&mut self, source: &str, target: &str) {
        self.plan.transform_path(source, target);
    }

    fn line(&mut self, message: &str) {
        self.plan.line(message);
        let _ = cliclack::log::info(message);
    }
}

/// Run the generator with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("PHP package")?;

    let defaults = PackageDefaults::discover(args.defaults.as_deref())
        .context("Failed to load package defaults")?;
    if defaults.is_some() {
        cliclack::log::info("Using package defaults")?;
    }

    let request = GenerateRequest {
        package: args.package.clone(),
        php_version: args.php_version.clone(),
        options: OptionSet {
            travis: args.travis,
            phpunit: args.phpunit,
            psr: Autoloader::from_option(&args.psr),
        },
        output_dir: args.output_dir.clone(),
        defaults,
    };

    let mut host = ConsoleHost::default();
    let mut interactive = CliclackPrompter;
    let mut decline = DeclinePrompter;
    let prompter: &mut dyn Prompter = if args.yes {
        if args.travis {
            cliclack::log::info("Skipping Travis CI questions (--yes mode)")?;
        }
        &mut decline
    } else {
        &mut interactive
    };

    let generated = generate(&request, &mut host, prompter).await?;

    cliclack::log::success(format!("Wrote {}", generated.manifest_path.display()))?;

    match &args.plan {
        Some(path) => {
            host.plan
                .write_to(path)
                .await
                .with_context(|| format!("Failed to write render plan to {}", path.display()))?;
            cliclack::log::info(format!("Render plan written to {}", path.display()))?;
        }
        None => {
            println!();
            println!("  Path instructions");
            println!();
            host.plan.print_summary();
            println!();
        }
    }

    cliclack::outro(format!("Created {}", generated.identifier))?;

    Ok(())
}
