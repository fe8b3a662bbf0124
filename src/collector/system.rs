//! Live host provider backed by the `sysinfo` crate.

use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use sysinfo::{CpuRefreshKind, Disks, MacAddr, Networks, RefreshKind, System};

use crate::collector::traits::{
    AddressEntry, AddressFamily, DiskIoCounters, HostIdentity, HostProvider, Interface,
    NetIoCounters, Partition, PartitionUsage,
};

/// All-ones hardware address, the broadcast destination on Ethernet.
const LINK_BROADCAST: &str = "ff:ff:ff:ff:ff:ff";

/// Queries the live host through `sysinfo`.
///
/// Disk and network lists are refreshed on every query, so repeated runs
/// inside a long-lived process observe current host state rather than a
/// snapshot taken at startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProvider;

impl SystemProvider {
    /// Creates a new `SystemProvider`.
    pub fn new() -> Self {
        Self
    }
}

impl HostProvider for SystemProvider {
    fn identity(&self) -> io::Result<HostIdentity> {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
        );
        let processor = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();

        Ok(HostIdentity {
            system: System::name().unwrap_or_default(),
            release: System::kernel_version().unwrap_or_default(),
            version: System::os_version().unwrap_or_default(),
            node_name: System::host_name().unwrap_or_default(),
            machine: System::cpu_arch(),
            processor,
        })
    }

    fn boot_time(&self) -> io::Result<u64> {
        Ok(System::boot_time())
    }

    fn partitions(&self) -> io::Result<Vec<Partition>> {
        let disks = Disks::new_with_refreshed_list();
        Ok(disks
            .list()
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                file_system_type: disk.file_system().to_string_lossy().to_string(),
            })
            .collect())
    }

    fn usage(&self, mount_point: &str) -> io::Result<PartitionUsage> {
        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new(mount_point))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no partition mounted at {}", mount_point),
                )
            })?;

        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);
        let percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Ok(PartitionUsage {
            total,
            used,
            free,
            percent,
        })
    }

    fn disk_io(&self) -> io::Result<DiskIoCounters> {
        let disks = Disks::new_with_refreshed_list();
        let mut counters = DiskIoCounters::default();
        for disk in disks.list() {
            let usage = disk.usage();
            counters.read_bytes += usage.total_read_bytes;
            counters.write_bytes += usage.total_written_bytes;
        }
        Ok(counters)
    }

    fn interfaces(&self) -> io::Result<Vec<Interface>> {
        let networks = Networks::new_with_refreshed_list();
        let mut interfaces = Vec::new();
        for (name, data) in &networks {
            let mut addresses = Vec::new();
            for ip in data.ip_networks() {
                addresses.push(match ip.addr {
                    IpAddr::V4(addr) => {
                        let mask = v4_mask(ip.prefix);
                        AddressEntry {
                            family: AddressFamily::V4,
                            address: Some(addr.to_string()),
                            netmask: Some(mask.to_string()),
                            broadcast: Some(v4_broadcast(addr, mask).to_string()),
                        }
                    }
                    IpAddr::V6(addr) => AddressEntry {
                        family: AddressFamily::Other,
                        address: Some(addr.to_string()),
                        netmask: None,
                        broadcast: None,
                    },
                });
            }
            // The OS lists the hardware address after the IP entries, so
            // it is the one that survives last-wins replacement.
            let mac = data.mac_address();
            if mac != MacAddr::UNSPECIFIED {
                addresses.push(AddressEntry {
                    family: AddressFamily::Link,
                    address: Some(mac.to_string()),
                    netmask: None,
                    broadcast: Some(LINK_BROADCAST.to_string()),
                });
            }
            interfaces.push(Interface {
                name: name.clone(),
                addresses,
            });
        }
        Ok(interfaces)
    }

    fn net_io(&self) -> io::Result<NetIoCounters> {
        let networks = Networks::new_with_refreshed_list();
        let mut counters = NetIoCounters::default();
        for (_, data) in &networks {
            counters.bytes_sent += data.total_transmitted();
            counters.bytes_received += data.total_received();
        }
        Ok(counters)
    }
}

/// Expands a CIDR prefix length into a dotted-quad netmask.
fn v4_mask(prefix: u8) -> Ipv4Addr {
    let bits = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix.min(32) as u32)
    };
    Ipv4Addr::from(bits)
}

/// Computes the directed broadcast address for an IPv4 network.
fn v4_broadcast(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) | !u32::from(mask))
}
