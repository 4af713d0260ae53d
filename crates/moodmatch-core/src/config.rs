//! TOML-based external question banks.
//!
//! The built-in bank is compiled in and needs no configuration. A campaign
//! can override it with a TOML file, stored at
//! `~/.config/moodmatch/bank.toml`:
//!
//! ```toml
//! [[questions]]
//! id = 1
//! prompt = "When you're at a party, you usually..."
//!
//! [[questions.options]]
//! category = "outgoing"
//! text = "Talk to everyone!"
//! emoji = "🎉"
//! # weight defaults to 1
//! ```
//!
//! Every loaded bank is validated before use; a file that breaks the
//! one-option-per-category invariant is rejected, never patched up.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::quiz::bank::QuestionBank;

/// Returns `~/.config/moodmatch[-dev]/` based on MOODMATCH_ENV.
///
/// Set MOODMATCH_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODMATCH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("moodmatch-dev")
    } else {
        base_dir.join("moodmatch")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the external bank file.
pub fn bank_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("bank.toml"))
}

/// Parse a bank from TOML text and validate it.
pub fn bank_from_toml_str(content: &str) -> Result<QuestionBank> {
    let bank: QuestionBank =
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
    bank.validate()?;
    Ok(bank)
}

/// Load and validate a bank file.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    bank_from_toml_str(&content)
}

/// Load the bank from the default path, falling back to the built-in
/// bank when no file exists.
pub fn load_or_builtin() -> Result<QuestionBank> {
    let path = bank_path()?;
    if path.exists() {
        load_bank(&path)
    } else {
        Ok(QuestionBank::builtin())
    }
}

/// Serialize `bank` to TOML and write it to `path`.
///
/// Used by `bank init` to seed a campaign file from the built-in data.
pub fn save_bank(bank: &QuestionBank, path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(bank).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}
