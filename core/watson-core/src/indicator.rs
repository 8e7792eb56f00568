//! WatsonIndicator - the entry point for host UIs.
//!
//! The host (panel widget, tray icon, debug CLI) constructs one indicator per
//! placement, hands it a presenter callback, and destroys it on teardown.
//! There is no global registration: the indicator is an explicit handle whose
//! lifetime the host controls.

use crate::reader;
use crate::status::Status;
use crate::storage::StorageConfig;
use crate::watcher::{StateWatch, StatusCallback};
use std::sync::{Arc, Mutex};

/// Owns the state watch and pushes status updates to the presenter.
///
/// Construction performs the first synchronous status computation, so the
/// presenter gets its initial paint before any file-change event arrives. If
/// the watch cannot be established the indicator still works in a degraded
/// mode: the initial status is delivered, but no further automatic updates
/// occur until the host reconstructs the indicator.
pub struct WatsonIndicator {
    storage: StorageConfig,
    current: Arc<Mutex<Status>>,
    forward: StatusCallback,
    watch: Option<StateWatch>,
}

impl WatsonIndicator {
    /// Creates an indicator against the default Watson configuration root.
    pub fn new(on_status: StatusCallback) -> Self {
        Self::with_storage(StorageConfig::default(), on_status)
    }

    /// Creates an indicator against an injected configuration root.
    /// Used for testing with temp directories.
    pub fn with_storage(storage: StorageConfig, on_status: StatusCallback) -> Self {
        let current = Arc::new(Mutex::new(Status::Inactive));

        // Every update path goes through one forwarding callback: record the
        // status, then hand it to the presenter unconditionally. The
        // presenter treats each call as "set current display to this status",
        // so no diffing happens here.
        let forward: StatusCallback = {
            let current = Arc::clone(&current);
            Arc::new(move |status| {
                *current.lock().unwrap() = status;
                on_status(status);
            })
        };

        let watch = match StateWatch::spawn(storage.clone(), Arc::clone(&forward)) {
            Ok(watch) => Some(watch),
            Err(err) => {
                tracing::warn!(error = %err, "State watch unavailable; indicator will not auto-update");
                None
            }
        };

        let indicator = Self {
            storage,
            current,
            forward,
            watch,
        };
        indicator.refresh();
        indicator
    }

    /// Re-reads the state file and re-renders now, watch or no watch.
    pub fn refresh(&self) {
        (self.forward)(reader::current_status(&self.storage));
    }

    /// The most recently computed status.
    pub fn status(&self) -> Status {
        *self.current.lock().unwrap()
    }

    /// Whether live updates are active, or the indicator is degraded.
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Releases the watch; no callbacks are delivered after this returns.
    /// Idempotent, and safe on an indicator whose watch never came up.
    pub fn release(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.release();
        }
    }
}

impl Drop for WatsonIndicator {
    fn drop(&mut self) {
        self.release();
    }
}
