//! Engine and session configuration.
//!
//! | Variable               | Meaning                                  | Default |
//! |------------------------|------------------------------------------|---------|
//! | `UNITCONV_HISTORY_CAP` | number of history entries kept (≥ 1)     | `5`     |
//! | `UNITCONV_STRICT`      | reject invalid input instead of skipping | `false` |
//!
//! Values are read from the process environment after a `.env` file has
//! been loaded (once) with `dotenvy`.

use std::sync::Once;

use tracing::warn;

use crate::error::{ConvertError, Result};
use crate::history::DEFAULT_HISTORY_CAP;

pub const HISTORY_CAP_VAR: &str = "UNITCONV_HISTORY_CAP";
pub const STRICT_VAR: &str = "UNITCONV_STRICT";

/// What the engine does with input it cannot convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Empty or non‑numeric input yields no result and no error, so a
    /// UI can show "no result yet" while the user is typing.
    #[default]
    Lenient,
    /// Empty or non‑numeric input fails with
    /// [`ConvertError::InvalidInput`].
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_cap: usize,
    pub input_mode: InputMode,
}

impl Config {
    /// Defaults: 5 history entries, lenient input.
    pub fn new() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            input_mode: InputMode::Lenient,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn history_cap(mut self, cap: usize) -> Self { self.history_cap = cap; self }
    pub fn input_mode(mut self, mode: InputMode) -> Self { self.input_mode = mode; self }
    pub fn strict(self) -> Self { self.input_mode(InputMode::Strict) }

    // ── Environment ─────────────────────────────────────────────────

    /// Read the configuration from the environment (and `.env`).
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key → value source.
    ///
    /// ```
    /// use unitconv::{Config, InputMode};
    ///
    /// let cfg = Config::from_lookup(|key| match key {
    ///     "UNITCONV_HISTORY_CAP" => Some("10".to_string()),
    ///     "UNITCONV_STRICT" => Some("true".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(cfg.history_cap, 10);
    /// assert_eq!(cfg.input_mode, InputMode::Strict);
    /// # Ok::<(), unitconv::ConvertError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::new();

        if let Some(raw) = non_empty(&lookup, HISTORY_CAP_VAR) {
            cfg.history_cap = raw.parse().map_err(|_| {
                ConvertError::InvalidConfig(format!("{HISTORY_CAP_VAR}={raw} is not a count"))
            })?;
        }

        if let Some(raw) = non_empty(&lookup, STRICT_VAR) {
            cfg.input_mode = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => InputMode::Strict,
                "0" | "false" | "no" | "off" => InputMode::Lenient,
                _ => {
                    return Err(ConvertError::InvalidConfig(format!(
                        "{STRICT_VAR}={raw} is not a boolean"
                    )));
                }
            };
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_cap == 0 {
            return Err(ConvertError::InvalidConfig(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::new() }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!(key, "ignoring empty configuration value");
        return None;
    }
    Some(trimmed.to_string())
}

// ── .env loading (once) ──────────────────────────────────────────────

fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        match dotenvy::dotenv() {
            Ok(_) => return,
            Err(e) if !e.not_found() => {
                warn!(error = %e, "failed to load .env");
                return;
            }
            Err(_) => {}
        }
        if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let p = std::path::PathBuf::from(dir).join(".env");
            if p.exists() { load_env_file(&p); return; }
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() { load_env_file(&p); }
            }
        }
    });
}

fn load_env_file(path: &std::path::Path) {
    if let Err(e) = dotenvy::from_path(path) {
        warn!(path = %path.display(), error = %e, "failed to load .env");
    }
}
