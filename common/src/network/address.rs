//! # Address Forms
//!
//! Converts between the two spellings of an IP address used across gateway
//! configuration:
//! * **Bare** form (`10.0.0.1`, `fe80::1`), accepted by socket APIs.
//! * **Literal** form (`10.0.0.1`, `[fe80::1]`), used wherever a port or path
//!   may follow the host, as in RFC 3986 URIs and LIO portal names.
//!
//! IPv4 addresses are never bracketed. Neither function validates its input:
//! strings that are not addresses pass through untouched.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

/// IP address family, in the order lookups and probes try them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub const ALL: [AddressFamily; 2] = [AddressFamily::Ipv4, AddressFamily::Ipv6];

    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }

    pub fn matches(self, ip: &IpAddr) -> bool {
        Self::of(ip) == self
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => f.write_str("IPv4"),
            Self::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// Strips one pair of enclosing brackets from an IPv6 literal.
///
/// Anything that is not fully wrapped in `[` ... `]` is returned as given.
pub fn to_bare(address: &str) -> &str {
    address
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(address)
}

/// Returns the literal form: bracketed for IPv6, bare for everything else.
pub fn to_literal(address: &str) -> String {
    let bare: &str = to_bare(address);
    match bare.parse::<Ipv6Addr>() {
        Ok(_) => format!("[{bare}]"),
        Err(_) => bare.to_string(),
    }
}

/// Joins a host and port, bracketing IPv6 hosts so the port stays unambiguous.
pub fn with_port(address: &str, port: u16) -> String {
    format!("{}:{port}", to_literal(address))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
