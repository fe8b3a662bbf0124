//! Abstraction over the OS facilities that supply raw inventory data.
//!
//! The `HostProvider` trait allows the collectors to work with both the
//! live host (via [`SystemProvider`](crate::collector::SystemProvider))
//! and mock implementations for testing.

use std::io;

/// Uname-style identity fields for the host.
#[derive(Debug, Clone, Default)]
pub struct HostIdentity {
    pub system: String,
    pub release: String,
    pub version: String,
    pub node_name: String,
    pub machine: String,
    pub processor: String,
}

/// A mounted partition as enumerated by the OS.
#[derive(Debug, Clone)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub file_system_type: String,
}

/// Raw usage figures for one mount point, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct PartitionUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    /// Percentage of the partition in use, `0.0..=100.0`.
    pub percent: f64,
}

/// Cumulative disk I/O counters since boot, in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskIoCounters {
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Cumulative network I/O counters since boot, in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetIoCounters {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// Address family tag for one interface address entry.
///
/// Matched by value in the network collector. Families other than IPv4
/// and link-layer are carried as `Other` and skipped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    /// IPv4 address entry.
    V4,
    /// Hardware (MAC) address entry.
    Link,
    /// Any other family (IPv6 and friends).
    Other,
}

/// One address entry attached to an interface.
#[derive(Debug, Clone)]
pub struct AddressEntry {
    pub family: AddressFamily,
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
}

/// A network interface with its address entries in OS order.
#[derive(Debug, Clone)]
pub struct Interface {
    pub name: String,
    pub addresses: Vec<AddressEntry>,
}

/// Abstraction for host inventory queries.
///
/// All methods query the OS afresh on every call; implementations must
/// not cache results between runs.
pub trait HostProvider {
    /// Queries the six uname-style identity fields.
    fn identity(&self) -> io::Result<HostIdentity>;

    /// Queries the boot timestamp as seconds since the Unix epoch.
    fn boot_time(&self) -> io::Result<u64>;

    /// Enumerates mounted partitions.
    fn partitions(&self) -> io::Result<Vec<Partition>>;

    /// Queries usage figures for one mount point.
    ///
    /// May fail with [`io::ErrorKind::PermissionDenied`] for mounts the
    /// current user cannot stat.
    fn usage(&self, mount_point: &str) -> io::Result<PartitionUsage>;

    /// Queries cumulative disk I/O counters since boot.
    fn disk_io(&self) -> io::Result<DiskIoCounters>;

    /// Enumerates network interfaces with their address entries.
    fn interfaces(&self) -> io::Result<Vec<Interface>>;

    /// Queries cumulative network I/O counters since boot.
    fn net_io(&self) -> io::Result<NetIoCounters>;
}
