//! sysdump - one-shot host inventory report.
//!
//! Collects OS identity, disk, and network inventory from the live host
//! and writes it to a CSV file.

use clap::Parser;
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;

use sysdump::collector::SystemProvider;
use sysdump::report::{Sections, dump_to_csv};

/// Host inventory snapshot tool.
#[derive(Parser)]
#[command(name = "sysdump", about = "Host inventory snapshot tool", version)]
struct Args {
    /// Output base name; ".csv" is appended automatically.
    #[arg(default_value = "sysdump")]
    output: String,

    /// Include the host identity section. Disable with --host=false.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    host: bool,

    /// Include the disk section. Disable with --disk=false.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    disk: bool,

    /// Include the network section. Disable with --network=false.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    network: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysdump={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let sections = Sections {
        host: args.host,
        disk: args.disk,
        network: args.network,
    };

    let provider = SystemProvider::new();
    match dump_to_csv(&provider, &args.output, sections) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
