//! Pre-built mock hosts for tests.

use super::MockProvider;
use crate::collector::traits::{
    AddressEntry, AddressFamily, DiskIoCounters, HostIdentity, NetIoCounters, PartitionUsage,
};

impl MockProvider {
    /// A host with one accessible and one permission-denied partition,
    /// and a single interface carrying one IPv4 entry.
    ///
    /// Exercises both recovery paths of the disk collector and the
    /// placeholder rendering of the network section.
    pub fn mixed_access_host() -> Self {
        MockProvider::new()
            .with_identity(HostIdentity {
                system: "Linux".to_string(),
                release: "6.8.0-45-generic".to_string(),
                version: "#45-Ubuntu SMP".to_string(),
                node_name: "testbox".to_string(),
                machine: "x86_64".to_string(),
                processor: "Example CPU @ 3.00GHz".to_string(),
            })
            .with_boot_time(1_700_000_000)
            .add_partition(
                "/dev/sda1",
                "/",
                "ext4",
                PartitionUsage {
                    total: 2_147_483_648,
                    used: 1_073_741_824,
                    free: 1_073_741_824,
                    percent: 50.0,
                },
            )
            .add_denied_partition("/dev/sda2", "/restricted", "ext4")
            .with_disk_io(DiskIoCounters {
                read_bytes: 1_073_741_824,
                write_bytes: 1_073_741_824,
            })
            .add_interface(
                "eth0",
                vec![AddressEntry {
                    family: AddressFamily::V4,
                    address: Some("10.0.0.5".to_string()),
                    netmask: Some("255.255.255.0".to_string()),
                    broadcast: Some("10.0.0.255".to_string()),
                }],
            )
            .with_net_io(NetIoCounters {
                bytes_sent: 1_073_741_824,
                bytes_received: 1_073_741_824,
            })
    }
}
