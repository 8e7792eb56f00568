//! Change notifications for the Watson state file.
//!
//! One `StateWatch` owns one OS-level subscription. Events are delivered to a
//! dedicated thread through a channel, so callback invocations are serialized
//! and never overlap. There is no retry if the OS silently drops the watch.

use crate::error::{Result, WatsonError};
use crate::reader;
use crate::status::Status;
use crate::storage::StorageConfig;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

/// Callback invoked with the freshly classified status after each change.
pub type StatusCallback = Arc<dyn Fn(Status) + Send + Sync>;

/// A live subscription to change notifications on the state file.
pub struct StateWatch {
    watcher: Option<RecommendedWatcher>,
    delivery: Option<thread::JoinHandle<()>>,
    closed: Arc<AtomicBool>,
}

impl StateWatch {
    /// Subscribes to change notifications for the state file.
    ///
    /// The watch is placed on the configuration directory (non-recursive) and
    /// filtered to the state file name, so it also catches the file being
    /// created for the first time. Each matching OS event triggers exactly
    /// one read-and-classify pass and one callback invocation; events are not
    /// debounced or coalesced. Redundant updates are expected and harmless
    /// because re-rendering the same status is idempotent.
    pub fn spawn(storage: StorageConfig, on_status: StatusCallback) -> Result<StateWatch> {
        let watch_dir = storage.config_root().to_path_buf();
        let state_name = storage.state_file().file_name().map(OsStr::to_os_string);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })
        .map_err(|source| WatsonError::WatchSetup {
            path: watch_dir.clone(),
            source,
        })?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|source| WatsonError::WatchSetup {
                path: watch_dir.clone(),
                source,
            })?;

        let closed = Arc::new(AtomicBool::new(false));
        let delivery_closed = Arc::clone(&closed);
        let delivery = thread::spawn(move || {
            while let Ok(event) = rx.recv() {
                if delivery_closed.load(Ordering::SeqCst) {
                    break;
                }
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    continue;
                }
                let touches_state_file = event
                    .paths
                    .iter()
                    .any(|path| path.file_name() == state_name.as_deref());
                if !touches_state_file {
                    continue;
                }
                tracing::debug!(kind = ?event.kind, "state file changed");
                on_status(reader::current_status(&storage));
            }
        });

        Ok(StateWatch {
            watcher: Some(watcher),
            delivery: Some(delivery),
            closed,
        })
    }

    /// Tears down the subscription.
    ///
    /// No callback is invoked once release begins, and the delivery thread is
    /// gone by the time this returns — the owner may safely destroy the
    /// callback target afterwards. Idempotent: releasing an already-released
    /// handle is a no-op.
    pub fn release(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        // Dropping the watcher ends the OS subscription and closes the event
        // channel, which terminates the delivery loop.
        drop(self.watcher.take());
        if let Some(delivery) = self.delivery.take() {
            let _ = delivery.join();
        }
    }
}

impl Drop for StateWatch {
    fn drop(&mut self) {
        self.release();
    }
}
