//! Interactive collection of the PHP versions tested on Travis CI

use crate::error::Result;
use serde::Serialize;
use std::collections::VecDeque;
use std::io;

/// A PHP version in the CI matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CiVersionEntry {
    pub version: String,
    #[serde(rename = "allowFailure")]
    pub allow_failure: bool,
}

/// Source of answers for interactive questions
pub trait Prompter {
    /// Ask a yes/no question, `default` being the answer on plain enter
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Ask for a free-form line of text
    fn input(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompter for non-interactive runs: declines every question
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclinePrompter;

impl Prompter for DeclinePrompter {
    fn confirm(&mut self, _prompt: &str, _default: bool) -> io::Result<bool> {
        Ok(false)
    }

    fn input(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(String::new())
    }
}

/// Prompter replaying pre-recorded answers, for automation and tests
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    inputs: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(confirms: impl IntoIterator<Item = bool>, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            confirms: confirms.into_iter().collect(),
            inputs: inputs.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str, _default: bool) -> io::Result<bool> {
        self.asked.push(prompt.to_string());
        self.confirms.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted confirmation left")
        })
    }

    fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectorState {
    Prompting,
    Done,
}

/// Question loop gathering CI versions until the user declines
#[derive(Debug)]
pub struct TravisCollector {
    state: CollectorState,
    versions: Vec<CiVersionEntry>,
}

impl Default for TravisCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TravisCollector {
    pub fn new() -> Self {
        Self {
            state: CollectorState::Prompting,
            versions: Vec::new(),
        }
    }

    /// Run the loop to completion and return the versions in entry order
    pub fn collect<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Vec<CiVersionEntry>> {
        let mut collector = Self::new();
        while !collector.is_done() {
            collector.step(prompter)?;
        }
        Ok(collector.into_versions())
    }

    /// Ask one round of questions
    ///
    /// A declined "add a version" moves the collector to done; anything else
    /// records one entry and keeps prompting. Calling this when done is a no-op.
    pub fn step<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<()> {
        if self.state == CollectorState::Done {
            return Ok(());
        }

        if !prompter.confirm("Would you like to add a PHP version to test?", true)? {
            self.state = CollectorState::Done;
            return Ok(());
        }

        let version = prompter.input("Which PHP version would you like to test?")?;
        let allow_failure = prompter.confirm(
            &format!("Do you want to allow failures for PHP version {}?", version),
            false,
        )?;

        self.versions.push(CiVersionEntry {
            version,
            allow_failure,
        });

        Ok(())
    }

    pub fn is_done(&self) -> bool {
        self.state == CollectorState::Done
    }

    pub fn versions(&self) -> &[CiVersionEntry] {
        &self.versions
    }

    pub fn into_versions(self) -> Vec<CiVersionEntry> {
        self.versions
    }
}
