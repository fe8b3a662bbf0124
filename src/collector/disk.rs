//! Disk inventory collector.

use std::io;

use tracing::{debug, warn};

use crate::collector::CollectError;
use crate::collector::traits::{HostProvider, PartitionUsage};
use crate::fmt::format_size;
use crate::model::{DiskRecord, PartitionRecord, UsageFields};

/// Collects partitions, per-partition usage, and disk I/O counters.
pub struct DiskCollector<'a, P: HostProvider> {
    provider: &'a P,
}

impl<'a, P: HostProvider> DiskCollector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Collects the disk record.
    ///
    /// Mount point and filesystem type are recorded for every partition.
    /// A denied usage query downgrades that partition to an absent usage
    /// tuple and collection continues; any other provider failure aborts
    /// the run. Zero partitions still yields a valid I/O summary.
    pub fn collect(&self) -> Result<DiskRecord, CollectError> {
        let mut record = DiskRecord::default();

        for partition in self.provider.partitions()? {
            let usage = match self.provider.usage(&partition.mount_point) {
                Ok(usage) => Some(humanize_usage(&usage)),
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    warn!("usage query denied for {}", partition.mount_point);
                    None
                }
                Err(e) => return Err(e.into()),
            };
            upsert_partition(
                &mut record.partitions,
                PartitionRecord {
                    device: partition.device,
                    mount_point: partition.mount_point,
                    file_system_type: partition.file_system_type,
                    usage,
                },
            );
        }
        debug!("collected {} partitions", record.partitions.len());

        let counters = self.provider.disk_io()?;
        record.total_io_read = format_size(counters.read_bytes);
        record.total_io_write = format_size(counters.write_bytes);

        Ok(record)
    }
}

/// Renders raw usage figures through the unit formatter. The percentage
/// stays numeric; sizes keep no raw value alongside the rendered one.
fn humanize_usage(usage: &PartitionUsage) -> UsageFields {
    UsageFields {
        total: format_size(usage.total),
        used: format_size(usage.used),
        free: format_size(usage.free),
        percent: usage.percent,
    }
}

/// Inserts a partition, replacing an earlier entry with the same device
/// key in place so the collection stays free of duplicate keys.
fn upsert_partition(partitions: &mut Vec<PartitionRecord>, partition: PartitionRecord) {
    match partitions.iter_mut().find(|p| p.device == partition.device) {
        Some(existing) => *existing = partition,
        None => partitions.push(partition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockProvider;
    use crate::collector::traits::DiskIoCounters;

    fn usage_2g() -> PartitionUsage {
        PartitionUsage {
            total: 2_147_483_648,
            used: 1_073_741_824,
            free: 1_073_741_824,
            percent: 50.0,
        }
    }

    #[test]
    fn accessible_partition_is_humanized() {
        let provider = MockProvider::new()
            .add_partition("/dev/sda1", "/", "ext4", usage_2g())
            .with_disk_io(DiskIoCounters {
                read_bytes: 1_073_741_824,
                write_bytes: 1_073_741_824,
            });

        let record = DiskCollector::new(&provider).collect().unwrap();
        assert_eq!(record.partitions.len(), 1);
        let usage = record.partitions[0].usage.as_ref().unwrap();
        assert_eq!(usage.total, "2.00GB");
        assert_eq!(usage.used, "1.00GB");
        assert_eq!(usage.free, "1.00GB");
        assert_eq!(usage.percent, 50.0);
        assert_eq!(record.total_io_read, "1.00GB");
        assert_eq!(record.total_io_write, "1.00GB");
    }

    #[test]
    fn denied_partition_has_no_usage_at_all() {
        let provider = MockProvider::new()
            .add_partition("/dev/sda1", "/", "ext4", usage_2g())
            .add_denied_partition("/dev/sda2", "/secret", "ext4");

        let record = DiskCollector::new(&provider).collect().unwrap();
        assert_eq!(record.partitions.len(), 2);
        assert!(record.partitions[0].usage.is_some());
        // All four usage fields are absent together, never one by one.
        assert!(record.partitions[1].usage.is_none());
        assert_eq!(record.partitions[1].mount_point, "/secret");
        assert_eq!(record.partitions[1].file_system_type, "ext4");
    }

    #[test]
    fn zero_partitions_still_summarizes_io() {
        let provider = MockProvider::new().with_disk_io(DiskIoCounters {
            read_bytes: 1024,
            write_bytes: 0,
        });

        let record = DiskCollector::new(&provider).collect().unwrap();
        assert!(record.partitions.is_empty());
        assert_eq!(record.total_io_read, "1.00KB");
        assert_eq!(record.total_io_write, "0.00B");
    }

    #[test]
    fn duplicate_device_replaces_earlier_entry_in_place() {
        let provider = MockProvider::new()
            .add_partition("/dev/sda1", "/a", "ext4", usage_2g())
            .add_partition("/dev/sdb1", "/b", "xfs", usage_2g())
            .add_partition("/dev/sda1", "/c", "btrfs", usage_2g());

        let record = DiskCollector::new(&provider).collect().unwrap();
        assert_eq!(record.partitions.len(), 2);
        assert_eq!(record.partitions[0].device, "/dev/sda1");
        assert_eq!(record.partitions[0].mount_point, "/c");
        assert_eq!(record.partitions[1].device, "/dev/sdb1");
    }

    #[test]
    fn non_permission_usage_failure_is_fatal() {
        let provider = MockProvider::new().add_broken_partition("/dev/sda1", "/gone", "ext4");

        let err = DiskCollector::new(&provider).collect().unwrap_err();
        assert!(matches!(err, CollectError::Io(_)));
    }
}
