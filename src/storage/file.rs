//! Snapshot save/load.
//!
//! Snapshots are encoded with `bincode` and written to a single file.
//! Decoded snapshots are validated before they are handed back.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::core::WarError;
use crate::rules::GameSnapshot;

/// Error types for save/load operations.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Encode(#[source] bincode::Error),
    #[error("deserialization error: {0}")]
    Decode(#[source] bincode::Error),
    #[error(transparent)]
    Snapshot(#[from] WarError),
}

/// Encode a snapshot to bytes.
pub fn encode(snapshot: &GameSnapshot) -> Result<Vec<u8>, SaveError> {
    bincode::serialize(snapshot).map_err(SaveError::Encode)
}

/// Decode and validate a snapshot.
pub fn decode(bytes: &[u8]) -> Result<GameSnapshot, SaveError> {
    let snapshot: GameSnapshot = bincode::deserialize(bytes).map_err(SaveError::Decode)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Write a snapshot to `path`, creating missing parent directories.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &GameSnapshot) -> Result<(), SaveError> {
    let path = path.as_ref();
    let bytes = encode(snapshot)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &bytes)?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    info!("Game saved to {}", path.display());
    Ok(())
}

/// Read a snapshot from `path`.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<GameSnapshot, SaveError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let snapshot = decode(&bytes)?;

    info!("Game loaded from {}", path.display());
    Ok(snapshot)
}
