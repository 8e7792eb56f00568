//! # watson-core
//!
//! Core library for the Watson panel indicator: detects whether the external
//! Watson time tracker is currently recording a session and pushes the
//! resulting two-valued [`Status`] to a host-supplied callback whenever the
//! state file changes.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. The state file is a few
//!   dozen bytes; reads happen inline on the delivery thread.
//! - **Graceful degradation**: A missing or malformed state file is a defined
//!   Inactive, not an error. A failed watch subscription is logged and the
//!   indicator keeps working without live updates.
//! - **No ambient globals**: The host owns one [`WatsonIndicator`] per panel
//!   placement; the configuration root is injected for testability.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use watson_core::WatsonIndicator;
//!
//! let indicator = WatsonIndicator::new(Arc::new(|status| {
//!     println!("watson is now {:?}", status);
//! }));
//! // ... host event loop runs; callback fires on each state-file change ...
//! drop(indicator); // unsubscribes, no callbacks after this
//! ```

pub mod error;
pub mod indicator;
pub mod reader;
pub mod status;
pub mod storage;
pub mod watcher;

pub use error::{Result, WatsonError};
pub use indicator::WatsonIndicator;
pub use reader::{current_status, read_state, WatsonState};
pub use status::Status;
pub use storage::StorageConfig;
pub use watcher::{StateWatch, StatusCallback};
