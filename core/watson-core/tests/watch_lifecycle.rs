//! End-to-end tests for the watch → read → classify → callback pipeline.
//!
//! These drive a real filesystem watch against a temp directory. Waits are
//! generous because OS notification latency varies; assertions check the
//! observed transitions, not exact event counts, since the OS may merge
//! rapid writes below this layer.

use fs_err as fs;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use watson_core::{Status, StatusCallback, StorageConfig, WatsonIndicator};

fn setup_storage() -> (TempDir, StorageConfig) {
    let temp = TempDir::new().unwrap();
    let storage = StorageConfig::with_root(temp.path().to_path_buf());
    (temp, storage)
}

fn channel_callback() -> (StatusCallback, mpsc::Receiver<Status>) {
    let (tx, rx) = mpsc::channel();
    let callback: StatusCallback = Arc::new(move |status| {
        let _ = tx.send(status);
    });
    (callback, rx)
}

/// Waits until `expected` comes out of the callback channel, discarding
/// intermediate statuses along the way.
fn wait_for(rx: &mpsc::Receiver<Status>, expected: Status) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(remaining) {
            Ok(status) if status == expected => return true,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
    false
}

fn drain(rx: &mpsc::Receiver<Status>) {
    while rx.try_recv().is_ok() {}
}

#[test]
fn initial_paint_reflects_existing_session() {
    let (_temp, storage) = setup_storage();
    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage, callback);

    // The construction-time paint is synchronous, so it is already queued.
    assert_eq!(rx.try_recv(), Ok(Status::Active));
    assert_eq!(indicator.status(), Status::Active);
}

#[test]
fn state_file_creation_activates() {
    let (_temp, storage) = setup_storage();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    assert!(indicator.is_watching());
    drain(&rx);

    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();

    assert!(wait_for(&rx, Status::Active));
    assert_eq!(indicator.status(), Status::Active);
}

#[test]
fn state_file_deletion_deactivates() {
    let (_temp, storage) = setup_storage();
    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    drain(&rx);

    fs::remove_file(storage.state_file()).unwrap();

    assert!(wait_for(&rx, Status::Inactive));
    assert_eq!(indicator.status(), Status::Inactive);
}

#[test]
fn truncated_write_self_corrects() {
    let (_temp, storage) = setup_storage();
    fs::write(storage.state_file(), "{}").unwrap();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    drain(&rx);

    // A partial write classifies as Inactive rather than crashing.
    fs::write(storage.state_file(), r#"{"proj"#).unwrap();
    assert!(wait_for(&rx, Status::Inactive));

    // The completed write corrects the classification on its own event.
    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();
    assert!(wait_for(&rx, Status::Active));
    assert_eq!(indicator.status(), Status::Active);
}

#[test]
fn rapid_writes_converge_on_final_content() {
    let (_temp, storage) = setup_storage();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    drain(&rx);

    fs::write(storage.state_file(), r#"{"project": "one"}"#).unwrap();
    fs::write(storage.state_file(), "{}").unwrap();
    fs::write(storage.state_file(), r#"{"project": "three"}"#).unwrap();

    assert!(wait_for(&rx, Status::Active));
    assert_eq!(indicator.status(), Status::Active);
}

#[test]
fn release_stops_callbacks() {
    let (_temp, storage) = setup_storage();
    let (callback, rx) = channel_callback();

    let mut indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    drain(&rx);

    indicator.release();
    assert!(!indicator.is_watching());

    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();

    assert!(
        rx.recv_timeout(Duration::from_millis(500)).is_err(),
        "no callback may be delivered after release"
    );
    // The handle itself stays usable for direct reads.
    indicator.refresh();
    assert_eq!(indicator.status(), Status::Active);
}

#[test]
fn drop_stops_callbacks() {
    let (_temp, storage) = setup_storage();
    let (callback, rx) = channel_callback();

    let indicator = WatsonIndicator::with_storage(storage.clone(), callback);
    drain(&rx);
    drop(indicator);

    fs::write(storage.state_file(), r#"{"project": "acme"}"#).unwrap();

    assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
}
