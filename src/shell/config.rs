//! Shell configuration

use crate::storage::DEFAULT_STORE_PATH;
use std::path::PathBuf;
use tracing::warn;

/// Default prompt
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path of the catalog document
    pub store_path: PathBuf,
    /// Prompt shown before each command
    pub prompt: String,
    /// Keep an in-memory line history
    pub history: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
            history: true,
        }
    }
}

impl ShellConfig {
    /// Create a new shell config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog document path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable line history
    pub fn history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }

    /// Build a config from command-line arguments (program name excluded)
    ///
    /// Recognises `--db <path>` / `-d <path>`; anything else is ignored.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = Self::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" | "-d" => match iter.next() {
                    Some(path) => config = config.store_path(path),
                    None => warn!("{} expects a path, using {}", arg, DEFAULT_STORE_PATH),
                },
                other => warn!(argument = other, "ignoring unknown argument"),
            }
        }
        config
    }
}
