//! Network inventory collector.

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::traits::{AddressFamily, HostProvider};
use crate::fmt::format_size;
use crate::model::{InterfaceRecord, NetworkRecord};

/// Collects interfaces, their address entries, and network I/O counters.
pub struct NetworkCollector<'a, P: HostProvider> {
    provider: &'a P,
}

impl<'a, P: HostProvider> NetworkCollector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Collects the network record.
    ///
    /// Each IPv4 or link-layer entry fully replaces the interface
    /// record, so when an interface exposes several retained entries the
    /// last one processed wins; the entries are not merged. Other
    /// address families are skipped. An interface with no retained
    /// entries keeps a record with all fields absent.
    pub fn collect(&self) -> Result<NetworkRecord, CollectError> {
        let mut record = NetworkRecord::default();

        for interface in self.provider.interfaces()? {
            let mut entry = InterfaceRecord::default();
            for address in interface.addresses {
                match address.family {
                    AddressFamily::V4 | AddressFamily::Link => {
                        entry = InterfaceRecord {
                            address: address.address,
                            netmask: address.netmask,
                            broadcast: address.broadcast,
                        };
                    }
                    AddressFamily::Other => {}
                }
            }
            upsert_interface(&mut record.interfaces, interface.name, entry);
        }
        debug!("collected {} interfaces", record.interfaces.len());

        let counters = self.provider.net_io()?;
        record.total_bytes_sent = format_size(counters.bytes_sent);
        record.total_bytes_received = format_size(counters.bytes_received);

        Ok(record)
    }
}

/// Inserts an interface record, replacing an earlier entry with the same
/// name in place so the collection stays free of duplicate keys.
fn upsert_interface(
    interfaces: &mut Vec<(String, InterfaceRecord)>,
    name: String,
    record: InterfaceRecord,
) {
    match interfaces.iter_mut().find(|(n, _)| *n == name) {
        Some((_, existing)) => *existing = record,
        None => interfaces.push((name, record)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockProvider;
    use crate::collector::traits::{AddressEntry, NetIoCounters};

    fn v4_entry(addr: &str, mask: &str, bcast: &str) -> AddressEntry {
        AddressEntry {
            family: AddressFamily::V4,
            address: Some(addr.to_string()),
            netmask: Some(mask.to_string()),
            broadcast: Some(bcast.to_string()),
        }
    }

    fn link_entry(mac: &str) -> AddressEntry {
        AddressEntry {
            family: AddressFamily::Link,
            address: Some(mac.to_string()),
            netmask: None,
            broadcast: Some("ff:ff:ff:ff:ff:ff".to_string()),
        }
    }

    fn other_entry(addr: &str) -> AddressEntry {
        AddressEntry {
            family: AddressFamily::Other,
            address: Some(addr.to_string()),
            netmask: None,
            broadcast: None,
        }
    }

    #[test]
    fn ipv4_only_interface() {
        let provider = MockProvider::new().add_interface(
            "eth0",
            vec![v4_entry("10.0.0.5", "255.255.255.0", "10.0.0.255")],
        );

        let record = NetworkCollector::new(&provider).collect().unwrap();
        let (name, iface) = &record.interfaces[0];
        assert_eq!(name, "eth0");
        assert_eq!(iface.address.as_deref(), Some("10.0.0.5"));
        assert_eq!(iface.netmask.as_deref(), Some("255.255.255.0"));
        assert_eq!(iface.broadcast.as_deref(), Some("10.0.0.255"));
    }

    #[test]
    fn link_only_interface_has_no_netmask() {
        let provider =
            MockProvider::new().add_interface("eth0", vec![link_entry("aa:bb:cc:dd:ee:ff")]);

        let record = NetworkCollector::new(&provider).collect().unwrap();
        let (_, iface) = &record.interfaces[0];
        assert_eq!(iface.address.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(iface.netmask, None);
        assert_eq!(iface.broadcast.as_deref(), Some("ff:ff:ff:ff:ff:ff"));
    }

    #[test]
    fn last_retained_entry_wins() {
        let provider = MockProvider::new().add_interface(
            "eth0",
            vec![
                v4_entry("10.0.0.5", "255.255.255.0", "10.0.0.255"),
                link_entry("aa:bb:cc:dd:ee:ff"),
            ],
        );

        let record = NetworkCollector::new(&provider).collect().unwrap();
        let (_, iface) = &record.interfaces[0];
        // The whole record is replaced, not merged with the IPv4 entry.
        assert_eq!(iface.address.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(iface.netmask, None);
    }

    #[test]
    fn other_families_are_ignored() {
        let provider = MockProvider::new().add_interface(
            "eth0",
            vec![
                v4_entry("10.0.0.5", "255.255.255.0", "10.0.0.255"),
                other_entry("fe80::1"),
            ],
        );

        let record = NetworkCollector::new(&provider).collect().unwrap();
        let (_, iface) = &record.interfaces[0];
        assert_eq!(iface.address.as_deref(), Some("10.0.0.5"));
    }

    #[test]
    fn interface_without_retained_entries_stays_empty() {
        let provider = MockProvider::new()
            .add_interface("lo", vec![other_entry("::1")])
            .add_interface("dummy0", vec![]);

        let record = NetworkCollector::new(&provider).collect().unwrap();
        assert_eq!(record.interfaces.len(), 2);
        assert_eq!(record.interfaces[0].1, InterfaceRecord::default());
        assert_eq!(record.interfaces[1].1, InterfaceRecord::default());
    }

    #[test]
    fn io_counters_are_humanized() {
        let provider = MockProvider::new().with_net_io(NetIoCounters {
            bytes_sent: 1536,
            bytes_received: 1_073_741_824,
        });

        let record = NetworkCollector::new(&provider).collect().unwrap();
        assert!(record.interfaces.is_empty());
        assert_eq!(record.total_bytes_sent, "1.50KB");
        assert_eq!(record.total_bytes_received, "1.00GB");
    }
}
