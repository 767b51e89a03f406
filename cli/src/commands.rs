pub mod address;
pub mod diff;
pub mod hash;
pub mod info;
pub mod probe;
pub mod resolve;
pub mod size;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use iscsigw_common::config::{DEFAULT_CEPH_CONF, DEFAULT_PROBE_PORT};
use iscsigw_core::hash::HashType;

#[derive(Parser)]
#[command(name = "iscsigw")]
#[command(about = "Address, reachability and reconciliation helpers for iSCSI gateways.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Cluster configuration file
    #[arg(long, global = true, default_value = DEFAULT_CEPH_CONF)]
    pub cephconf: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the literal form of an address (IPv6 in brackets)
    #[command(alias = "l")]
    Literal { address: String },
    /// Show the bare form of an address (brackets removed)
    #[command(alias = "b")]
    Bare { address: String },
    /// Resolve a host name or address to its IPv4/IPv6 addresses
    #[command(alias = "r")]
    Resolve { address: String },
    /// Check that every address accepts TCP connections
    #[command(alias = "p")]
    Probe {
        #[arg(required = true)]
        addresses: Vec<String>,
        /// TCP port to connect to
        #[arg(short, long, default_value_t = DEFAULT_PROBE_PORT)]
        port: u16,
        /// Per-attempt connect timeout in milliseconds
        #[arg(short, long = "timeout-ms", default_value_t = 1000)]
        timeout_ms: u64,
    },
    /// Compare a current and a desired comma-separated list
    #[command(alias = "d")]
    Diff {
        #[arg(long, value_delimiter = ',')]
        current: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        new: Vec<String>,
    },
    /// Validate disk sizes such as 10G and convert them to bytes
    #[command(alias = "s")]
    Size {
        #[arg(required = true)]
        sizes: Vec<String>,
    },
    /// Checksum one or more files
    #[command(alias = "h")]
    Hash {
        /// sha1, sha256, sha512 or md5
        #[arg(short = 't', long = "type", default_value = "sha256")]
        hash_type: HashType,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show host name and local addresses of this gateway
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
