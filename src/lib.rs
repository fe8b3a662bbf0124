//! sysdump - Host inventory snapshot library.
//!
//! Queries the host once for operating system identity, disk partitions,
//! and network interfaces through a [`HostProvider`], normalizes the
//! results into uniform records, and writes them as a quote-all CSV
//! report.

pub mod collector;
pub mod fmt;
pub mod model;
pub mod report;

pub use collector::{HostProvider, SystemProvider};
pub use report::{Sections, dump_to_csv};
