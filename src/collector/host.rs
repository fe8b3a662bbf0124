//! Host identity collector.

use chrono::{Local, TimeZone};

use crate::collector::CollectError;
use crate::collector::traits::HostProvider;
use crate::model::HostRecord;

/// Render format for the boot timestamp: `"Mon, 01 Jan 2024 08:30:00"`.
const BOOT_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Collects OS identity fields and the boot timestamp.
///
/// There is no recovery path here: if the provider cannot answer the
/// identity or boot-time query, the whole run fails.
pub struct HostCollector<'a, P: HostProvider> {
    provider: &'a P,
}

impl<'a, P: HostProvider> HostCollector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Collects the host record.
    ///
    /// The boot time is queried fresh on every call and rendered in
    /// local time, so long-lived processes report the current value
    /// rather than a snapshot captured at startup.
    pub fn collect(&self) -> Result<HostRecord, CollectError> {
        let identity = self.provider.identity()?;
        let boot_time = format_boot_time(self.provider.boot_time()? as i64)?;

        Ok(HostRecord {
            system: identity.system,
            release: identity.release,
            version: identity.version,
            node_name: identity.node_name,
            machine: identity.machine,
            processor: identity.processor,
            boot_time,
        })
    }
}

/// Renders an epoch timestamp with [`BOOT_TIME_FORMAT`] in local time.
fn format_boot_time(epoch_secs: i64) -> Result<String, CollectError> {
    let when = Local.timestamp_opt(epoch_secs, 0).earliest().ok_or_else(|| {
        CollectError::Time(format!(
            "boot timestamp {} is not representable in local time",
            epoch_secs
        ))
    })?;
    Ok(when.format(BOOT_TIME_FORMAT).to_string())
}
