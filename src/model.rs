//! Normalized inventory records produced by the collectors.
//!
//! Records are sentinel-free: fields that may be missing on the host are
//! `Option`s and are converted to display placeholders only when the
//! report is rendered. Each record is built once per run by its
//! collector and read-only afterwards; nothing is cached across runs.

/// Operating system identity plus the rendered boot timestamp.
#[derive(Debug, Clone)]
pub struct HostRecord {
    pub system: String,
    pub release: String,
    pub version: String,
    pub node_name: String,
    pub machine: String,
    pub processor: String,
    /// Boot time rendered as `"Mon, 01 Jan 2024 08:30:00"` in local time.
    pub boot_time: String,
}

/// Usage figures for one mounted partition, sizes already humanized.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageFields {
    pub total: String,
    pub used: String,
    pub free: String,
    pub percent: f64,
}

/// One mounted partition, keyed by device name.
///
/// `usage` is `None` exactly when the usage query was denied for the
/// mount point; the four usage fields are never partially known.
#[derive(Debug, Clone)]
pub struct PartitionRecord {
    pub device: String,
    pub mount_point: String,
    pub file_system_type: String,
    pub usage: Option<UsageFields>,
}

/// All partitions plus cumulative disk I/O since boot.
#[derive(Debug, Clone, Default)]
pub struct DiskRecord {
    /// Keyed by device name, no duplicates, in collected order.
    pub partitions: Vec<PartitionRecord>,
    pub total_io_read: String,
    pub total_io_write: String,
}

/// Address data for one network interface.
///
/// Holds either an IPv4 triple or a link-layer (MAC) triple, never both:
/// each retained address entry fully replaces the record, so the last
/// entry processed wins when an interface exposes several.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceRecord {
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
}

/// All interfaces plus cumulative network I/O since boot.
#[derive(Debug, Clone, Default)]
pub struct NetworkRecord {
    /// Keyed by interface name, no duplicates, in collected order.
    pub interfaces: Vec<(String, InterfaceRecord)>,
    pub total_bytes_sent: String,
    pub total_bytes_received: String,
}
