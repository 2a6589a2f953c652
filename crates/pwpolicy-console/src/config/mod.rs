//! Console config loader (strict parsing).

pub mod schema;

use std::fs;

use pwpolicy_core::error::{PolicyError, Result};

pub use schema::{ConsoleConfig, ConsoleSection, RealmSeed};

pub fn load_from_file(path: &str) -> Result<ConsoleConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolicyError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ConsoleConfig> {
    let cfg: ConsoleConfig = serde_yaml::from_str(s)
        .map_err(|e| PolicyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
