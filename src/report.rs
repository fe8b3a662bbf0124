//! Report assembly and CSV output.
//!
//! Builds the three inventory records and writes them as a quote-all CSV
//! document with fixed section order: host, disk, network. All three
//! collectors run on every invocation; the section toggles only filter
//! what gets written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::{
    CollectError, DiskCollector, HostCollector, HostProvider, NetworkCollector,
};
use crate::model::{DiskRecord, HostRecord, NetworkRecord};

/// Placeholder for the four usage cells of a partition whose usage query
/// was denied.
const UNAVAILABLE: &str = "Unavailable";
/// Placeholder for absent interface address fields.
const NULL: &str = "NULL";

/// Section toggles for the report. All sections are enabled by default.
#[derive(Debug, Clone, Copy)]
pub struct Sections {
    pub host: bool,
    pub disk: bool,
    pub network: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            host: true,
            disk: true,
            network: true,
        }
    }
}

/// Errors surfaced by the report entry point.
#[derive(Debug)]
pub enum ReportError {
    /// A collector failed; the host environment is unsupported or broken.
    Collect(CollectError),
    /// Writing the report failed for a reason other than denied access.
    Io(io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Collect(e) => write!(f, "collection failed: {}", e),
            ReportError::Io(e) => write!(f, "writing report failed: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<CollectError> for ReportError {
    fn from(e: CollectError) -> Self {
        ReportError::Collect(e)
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}

/// Collects all three records and writes the report to `<base_name>.csv`.
///
/// Full data is always gathered, even for sections excluded from the
/// output. A denied output file is reported on stdout together with a
/// remediation hint and yields `Ok(false)`; collector failures and other
/// I/O errors propagate. On success the absolute save location is
/// printed and the result is `Ok(true)`. Re-running with the same base
/// name truncates and overwrites the previous file.
pub fn dump_to_csv<P: HostProvider>(
    provider: &P,
    base_name: &str,
    sections: Sections,
) -> Result<bool, ReportError> {
    let host = HostCollector::new(provider).collect()?;
    let disk = DiskCollector::new(provider).collect()?;
    let network = NetworkCollector::new(provider).collect()?;
    debug!(
        "records collected: {} partitions, {} interfaces",
        disk.partitions.len(),
        network.interfaces.len()
    );

    let path = PathBuf::from(format!("{}.csv", base_name));
    match write_report(&path, &host, &disk, &network, sections) {
        Ok(()) => {
            let saved = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
            println!("Writing to .csv successful!");
            println!("Report saved as {}", saved.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            println!("Writing to .csv failed!");
            println!("Please try again using a different filename.");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes the selected sections. The file is truncated on open and the
/// handle closes on every return path.
fn write_report(
    path: &Path,
    host: &HostRecord,
    disk: &DiskRecord,
    network: &NetworkRecord,
    sections: Sections,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = CsvWriter::new(BufWriter::new(file));

    if sections.host {
        write_host_section(&mut out, host)?;
    }
    if sections.disk {
        write_disk_section(&mut out, disk, host)?;
    }
    if sections.network {
        write_network_section(&mut out, network)?;
    }

    out.flush()
}

fn write_host_section<W: Write>(out: &mut CsvWriter<W>, host: &HostRecord) -> io::Result<()> {
    out.write_row(&["SYSTEM INFORMATION"])?;
    out.write_row(&["System", host.system.as_str()])?;
    out.write_row(&["Release", host.release.as_str()])?;
    out.write_row(&["Version", host.version.as_str()])?;
    out.write_row(&["Node name", host.node_name.as_str()])?;
    out.write_row(&["Machine", host.machine.as_str()])?;
    out.write_row(&["Processor", host.processor.as_str()])?;
    out.write_row(&["Boot Time", host.boot_time.as_str()])?;
    out.write_row(&[""])
}

fn write_disk_section<W: Write>(
    out: &mut CsvWriter<W>,
    disk: &DiskRecord,
    host: &HostRecord,
) -> io::Result<()> {
    out.write_row(&["DISK INFORMATION"])?;
    out.write_row(&["Read operations since boot", disk.total_io_read.as_str()])?;
    out.write_row(&["Write operations since boot", disk.total_io_write.as_str()])?;
    out.write_row(&["Partitions"])?;
    out.write_row(&[
        "Partition",
        "Mount Point",
        "File System Type",
        "Total Size",
        "Used",
        "Free",
        "Percentage Used",
    ])?;
    for partition in &disk.partitions {
        let usage = match &partition.usage {
            Some(usage) => [
                usage.total.clone(),
                usage.used.clone(),
                usage.free.clone(),
                format!("{:.1}", usage.percent),
            ],
            None => std::array::from_fn(|_| UNAVAILABLE.to_string()),
        };
        out.write_row(&[
            partition.device.as_str(),
            partition.mount_point.as_str(),
            partition.file_system_type.as_str(),
            usage[0].as_str(),
            usage[1].as_str(),
            usage[2].as_str(),
            usage[3].as_str(),
        ])?;
    }
    // The original report format repeats these identity rows here for
    // convenience when the disk section is read in isolation.
    out.write_row(&["Node name", host.node_name.as_str()])?;
    out.write_row(&["Machine", host.machine.as_str()])?;
    out.write_row(&["Processor", host.processor.as_str()])?;
    out.write_row(&[""])
}

fn write_network_section<W: Write>(
    out: &mut CsvWriter<W>,
    network: &NetworkRecord,
) -> io::Result<()> {
    out.write_row(&["NETWORK INFORMATION"])?;
    out.write_row(&[
        "Total bytes sent since boot",
        network.total_bytes_sent.as_str(),
    ])?;
    out.write_row(&[
        "Total bytes received since boot",
        network.total_bytes_received.as_str(),
    ])?;
    out.write_row(&["Interfaces"])?;
    out.write_row(&["Interface", "IP/MAC Address", "Net Mask", "Broadcast IP/MAC"])?;
    for (name, iface) in &network.interfaces {
        out.write_row(&[
            name.as_str(),
            iface.address.as_deref().unwrap_or(NULL),
            iface.netmask.as_deref().unwrap_or(NULL),
            iface.broadcast.as_deref().unwrap_or(NULL),
        ])?;
    }
    Ok(())
}

/// Minimal CSV writer that quotes every field (embedded quotes doubled)
/// and terminates rows with `\r\n`.
struct CsvWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvWriter<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn write_row(&mut self, fields: &[&str]) -> io::Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b",")?;
            }
            write!(self.out, "\"{}\"", field.replace('"', "\"\""))?;
        }
        self.out.write_all(b"\r\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
