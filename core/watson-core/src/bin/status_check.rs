//! Debug utility for inspecting the Watson state file and watch behavior.

use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use watson_core::{Status, StatusCallback, StorageConfig, WatsonIndicator};

fn main() {
    init_logging();

    let storage = StorageConfig::default();

    println!("Config root: {}", storage.config_root().display());
    println!("State file:  {}", storage.state_file().display());
    println!();

    let follow = env::args().any(|arg| arg == "--follow");

    let on_status: StatusCallback = Arc::new(|status: Status| {
        let label = match status {
            Status::Active => "🟢 ACTIVE",
            Status::Inactive => "⚫ INACTIVE",
        };
        println!("status: {}", label);
    });

    let indicator = WatsonIndicator::with_storage(storage, on_status);

    if follow {
        if !indicator.is_watching() {
            eprintln!("watch unavailable; nothing to follow");
            return;
        }
        println!("following state changes (ctrl-c to exit)");
        loop {
            std::thread::park();
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
