//! Interface to the template rendering host
//!
//! The generator never renders or copies files itself. It shares variables
//! and path instructions with a [`TemplateHost`], which the renderer consumes.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Capabilities the generator needs from the rendering host
pub trait TemplateHost {
    /// Expose a variable to the templates
    fn share(&mut self, key: &str, value: Value);

    /// Exclude paths (glob-like patterns) from the rendered output
    fn ignore_paths(&mut self, patterns: &[&str]);

    /// Relocate `source` to `target`; `target` may contain template placeholders
    fn transform_path(&mut self, source: &str, target: &str);

    /// Report a progress message to the user
    fn line(&mut self, message: &str);
}

/// In-memory host recording everything handed to it
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderPlan {
    pub variables: Map<String, Value>,
    pub transforms: IndexMap<String, String>,
    pub ignored: Vec<String>,
    #[serde(skip)]
    pub messages: Vec<String>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self, pattern: &str) -> bool {
        self.ignored.iter().any(|p| p == pattern)
    }

    /// Write the plan as JSON for the external renderer
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)
            .await
            .map_err(|source| ScaffoldError::OutputWriteFailure {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Print a short human-readable summary of the path instructions
    pub fn print_summary(&self) {
        if self.transforms.is_empty() && self.ignored.is_empty() {
            println!("{}", "No paths renamed or excluded".dimmed());
            return;
        }

        for (source, target) in &self.transforms {
            println!("  {} {} {} {}", "rename".cyan(), source, "->".blue(), target);
        }
        for pattern in &self.ignored {
            println!("  {} {}", "ignore".yellow(), pattern);
        }
    }
}

impl TemplateHost for RenderPlan {
    fn share(&mut self, key: &str, value: Value) {
        self.variables.insert(key.to_string(), value);
    }

    fn ignore_paths(&mut self, patterns: &[&str]) {
        for pattern in patterns {
            if !self.is_ignored(pattern) {
                self.ignored.push(pattern.to_string());
            }
        }
    }

    fn transform_path(&mut self, source: &str, target: &str) {
        self.transforms.insert(source.to_string(), target.to_string());
    }

    fn line(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
