//! Snapshot file I/O.

use crate::error::Result;
use curs_core::Snapshot;
use std::fs;
use std::path::Path;

/// Writes `snapshot` as pretty JSON with a trailing newline, creating
/// parent directories as needed.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut json = snapshot.to_json_pretty()?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let json = fs::read_to_string(path)?;
    Ok(Snapshot::from_json(&json)?)
}
