//! Inventory collectors and the provider abstraction they run against.
//!
//! Each collector borrows a [`HostProvider`], queries it once, and
//! returns a normalized record from [`crate::model`]. Collectors are
//! leaf-independent and share no mutable state.

mod disk;
mod host;
mod network;
mod system;

pub mod mock;
pub mod traits;

pub use disk::DiskCollector;
pub use host::HostCollector;
pub use network::NetworkCollector;
pub use system::SystemProvider;
pub use traits::HostProvider;

use std::io;

/// Errors surfaced by the collectors.
///
/// Only the per-partition permission failure is recovered inside a
/// collector; everything else propagates as a fatal failure of the run,
/// since it indicates an unsupported or broken host environment.
#[derive(Debug)]
pub enum CollectError {
    /// A provider query failed.
    Io(io::Error),
    /// The boot timestamp could not be represented in local time.
    Time(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Time(msg) => write!(f, "time error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<io::Error> for CollectError {
    fn from(e: io::Error) -> Self {
        CollectError::Io(e)
    }
}
