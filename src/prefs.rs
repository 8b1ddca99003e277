use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

const FILE_NAME: &str = ".menucard-theme";

/// Where the theme flag lives when no `--prefs` path is given.
pub fn default_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
    let mut path = PathBuf::from(home);
    path.push(FILE_NAME);
    Some(path)
}

/// Read the saved theme flag. Anything unreadable or unrecognized counts as
/// "no preference"; the caller falls back to its default.
pub fn load(path: &Path) -> Option<bool> {
    let contents = fs::read_to_string(path).ok()?;
    match contents.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        other => {
            warn!("unrecognized theme preference '{}' in {}", other, path.display());
            None
        }
    }
}

/// Persist the theme flag. Written on every toggle.
pub fn store(path: &Path, dark: bool) -> Result<()> {
    let value = if dark { "dark" } else { "light" };
    fs::write(path, value)
        .with_context(|| format!("failed to write theme preference to {}", path.display()))
}
