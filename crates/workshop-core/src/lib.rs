//! Workshop repository reconciliation
//!
//! Keeps a workshop's exercise and example projects internally consistent:
//! derives each project's package name from its path and mirrors solution
//! test suites into their paired problem variants.

pub mod classify;
pub mod error;
pub mod io;
pub mod manifest;
pub mod mirror;
pub mod path;
pub mod sync;

pub use classify::{Exercise, Project, Variant, VariantKind, WorkshopLayout};
pub use error::{Error, Result};
pub use manifest::{NameOutcome, PACKAGE_NAME_SEPARATOR};
pub use mirror::MirrorOutcome;
pub use path::NormalizedPath;
pub use sync::{SyncEngine, SyncOptions, SyncReport};
