//! `.env` file overlay.
//!
//! Reads `KEY=VALUE` pairs from a `.env` file and serves them behind the
//! process environment, which always wins. The overlay never mutates the
//! process environment itself.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Variables loaded from a `.env` file, consulted after the process
/// environment.
#[derive(Debug, Default)]
pub struct DotEnv {
    vars: HashMap<String, String>,
}

impl DotEnv {
    /// Loads `dir/.env` if it exists. A line splits at its first `=`;
    /// the rest of the line is the value, so values may themselves
    /// contain `=`. Lines without an `=` or without a key are ignored.
    pub fn load(dir: &Path) -> Self {
        let file = dir.join(".env");
        let Ok(contents) = fs::read_to_string(&file) else {
            return Self::default();
        };
        debug!(file = %file.display(), "loading environment overlay");

        let mut vars = HashMap::new();
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), value.to_string());
        }
        Self { vars }
    }

    /// Looks a variable up, process environment first.
    pub fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.vars.get(key).cloned())
    }
}
