//! In-memory host provider for tests.

use std::collections::HashMap;
use std::io;

use crate::collector::traits::{
    AddressEntry, DiskIoCounters, HostIdentity, HostProvider, Interface, NetIoCounters, Partition,
    PartitionUsage,
};

/// Outcome of a usage query against a mock mount point.
#[derive(Debug, Clone, Copy)]
enum UsageOutcome {
    Available(PartitionUsage),
    /// The mount denies access, like an unreadable CD-ROM tray or a
    /// restricted mount on Windows.
    Denied,
    /// The mount fails with a generic I/O error.
    Broken,
}

/// In-memory host provider.
///
/// Built up with chained `with_*`/`add_*` calls, then handed to the
/// collectors in place of [`SystemProvider`](crate::collector::SystemProvider).
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    identity: HostIdentity,
    boot_time: u64,
    partitions: Vec<Partition>,
    usage: HashMap<String, UsageOutcome>,
    disk_io: DiskIoCounters,
    interfaces: Vec<Interface>,
    net_io: NetIoCounters,
}

impl MockProvider {
    /// Creates an empty mock host: no partitions, no interfaces, zeroed
    /// counters, blank identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity fields.
    pub fn with_identity(mut self, identity: HostIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Sets the boot timestamp (epoch seconds).
    pub fn with_boot_time(mut self, boot_time: u64) -> Self {
        self.boot_time = boot_time;
        self
    }

    /// Adds a partition with an accessible usage query.
    pub fn add_partition(
        mut self,
        device: &str,
        mount_point: &str,
        file_system_type: &str,
        usage: PartitionUsage,
    ) -> Self {
        self.usage
            .insert(mount_point.to_string(), UsageOutcome::Available(usage));
        self.push_partition(device, mount_point, file_system_type);
        self
    }

    /// Adds a partition whose usage query fails with permission denied.
    pub fn add_denied_partition(
        mut self,
        device: &str,
        mount_point: &str,
        file_system_type: &str,
    ) -> Self {
        self.usage
            .insert(mount_point.to_string(), UsageOutcome::Denied);
        self.push_partition(device, mount_point, file_system_type);
        self
    }

    /// Adds a partition whose usage query fails with a generic I/O error.
    pub fn add_broken_partition(
        mut self,
        device: &str,
        mount_point: &str,
        file_system_type: &str,
    ) -> Self {
        self.usage
            .insert(mount_point.to_string(), UsageOutcome::Broken);
        self.push_partition(device, mount_point, file_system_type);
        self
    }

    /// Sets the cumulative disk I/O counters.
    pub fn with_disk_io(mut self, counters: DiskIoCounters) -> Self {
        self.disk_io = counters;
        self
    }

    /// Adds an interface with its address entries in the given order.
    pub fn add_interface(mut self, name: &str, addresses: Vec<AddressEntry>) -> Self {
        self.interfaces.push(Interface {
            name: name.to_string(),
            addresses,
        });
        self
    }

    /// Sets the cumulative network I/O counters.
    pub fn with_net_io(mut self, counters: NetIoCounters) -> Self {
        self.net_io = counters;
        self
    }

    fn push_partition(&mut self, device: &str, mount_point: &str, file_system_type: &str) {
        self.partitions.push(Partition {
            device: device.to_string(),
            mount_point: mount_point.to_string(),
            file_system_type: file_system_type.to_string(),
        });
    }
}

impl HostProvider for MockProvider {
    fn identity(&self) -> io::Result<HostIdentity> {
        Ok(self.identity.clone())
    }

    fn boot_time(&self) -> io::Result<u64> {
        Ok(self.boot_time)
    }

    fn partitions(&self) -> io::Result<Vec<Partition>> {
        Ok(self.partitions.clone())
    }

    fn usage(&self, mount_point: &str) -> io::Result<PartitionUsage> {
        match self.usage.get(mount_point) {
            Some(UsageOutcome::Available(usage)) => Ok(*usage),
            Some(UsageOutcome::Denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("usage denied for {}", mount_point),
            )),
            Some(UsageOutcome::Broken) => Err(io::Error::other(format!(
                "usage query failed for {}",
                mount_point
            ))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no partition mounted at {}", mount_point),
            )),
        }
    }

    fn disk_io(&self) -> io::Result<DiskIoCounters> {
        Ok(self.disk_io)
    }

    fn interfaces(&self) -> io::Result<Vec<Interface>> {
        Ok(self.interfaces.clone())
    }

    fn net_io(&self) -> io::Result<NetIoCounters> {
        Ok(self.net_io)
    }
}
