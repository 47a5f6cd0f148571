use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matches::Match;

const DATA_DIR: &str = "matchlog";
const LOG_FILE: &str = "matches.json";
const LOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogFile {
    version: u32,
    matches: Vec<Match>,
}

/// Reads a match log. A missing file is an empty log, not an error; a file
/// that exists but does not parse is an error the caller should see.
pub fn load_log(path: &Path) -> Result<Vec<Match>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("read match log {}", path.display()))?;
    let file: LogFile =
        serde_json::from_str(&raw).with_context(|| format!("parse match log {}", path.display()))?;
    if file.version != LOG_VERSION {
        anyhow::bail!(
            "match log {} has version {}, expected {LOG_VERSION}",
            path.display(),
            file.version
        );
    }
    Ok(file.matches)
}

pub fn save_log(path: &Path, matches: &[Match]) -> Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = LogFile {
        version: LOG_VERSION,
        matches: matches.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file).context("serialize match log")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap into {}", path.display()))?;
    Ok(())
}

/// Default log location, XDG first with a ~/.local/share fallback.
pub fn default_log_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_DATA_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(DATA_DIR).join(LOG_FILE));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(DATA_DIR)
            .join(LOG_FILE),
    )
}
