//! Reading the Watson state file.
//!
//! Watson only writes the state file once a session has been started at least
//! once, so an unreadable file is a defined "absent" outcome rather than an
//! error. The file is re-read from scratch on every observation; nothing is
//! cached across events.

use crate::status::Status;
use crate::storage::StorageConfig;
use fs_err as fs;

/// Snapshot of the external Watson tool's state, taken from one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatsonState {
    pub status: Status,
}

/// Reads and classifies the state file.
///
/// Returns `None` ("absent") if the file cannot be read for any reason —
/// missing file, permissions, I/O error. A readable file always yields a
/// state object; malformed content classifies as `Inactive` inside it.
pub fn read_state(storage: &StorageConfig) -> Option<WatsonState> {
    let bytes = fs::read(storage.state_file()).ok()?;
    Some(WatsonState {
        status: Status::from_state_bytes(&bytes),
    })
}

/// The current status, with an absent state file collapsed to `Inactive`.
pub fn current_status(storage: &StorageConfig) -> Status {
    read_state(storage).map(|state| state.status).unwrap_or_default()
}
