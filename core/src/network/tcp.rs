//! TCP-connect reachability checks for gateway and portal addresses.
//!
//! An address counts as reachable when a handshake on the chosen port
//! completes within the timeout over either IPv4 or IPv6. Probes run one at a
//! time; callers wanting parallel probes spawn one call per address.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use iscsigw_common::config::{DEFAULT_PROBE_PORT, DEFAULT_PROBE_TIMEOUT};
use iscsigw_common::network::address::{self, AddressFamily};
use tokio::net::{self, TcpStream};
use tokio::time::timeout;
use tracing::debug;

/// Why a single connect attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Refused,
    TimedOut,
    Unreachable,
    /// The name had no address in the family being tried.
    Unresolvable,
    /// A literal address of the other family.
    FamilyMismatch,
    Other(io::ErrorKind),
}

impl From<io::Error> for FailureKind {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => Self::Refused,
            io::ErrorKind::TimedOut => Self::TimedOut,
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                Self::Unreachable
            }
            kind => Self::Other(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub address: String,
    pub family: AddressFamily,
    pub kind: FailureKind,
}

/// Outcome of probing one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressProbe {
    pub address: String,
    /// Family that accepted the connection, if any did.
    pub connected: Option<AddressFamily>,
    pub failures: Vec<ProbeFailure>,
}

impl AddressProbe {
    pub fn is_reachable(&self) -> bool {
        self.connected.is_some()
    }
}

/// Outcome of probing a list of addresses.
///
/// Probing stops at the first unreachable address, so `addresses` holds
/// every reachable address up to and including the one that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub reachable: bool,
    pub addresses: Vec<AddressProbe>,
}

impl ProbeReport {
    pub fn failures(&self) -> impl Iterator<Item = &ProbeFailure> {
        self.addresses.iter().flat_map(|probe| probe.failures.iter())
    }
}

/// One address or an ordered list of addresses to probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeTargets(Vec<String>);

impl From<&str> for ProbeTargets {
    fn from(address: &str) -> Self {
        Self(vec![address.to_string()])
    }
}

impl From<String> for ProbeTargets {
    fn from(address: String) -> Self {
        Self(vec![address])
    }
}

impl From<Vec<String>> for ProbeTargets {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl From<Vec<&str>> for ProbeTargets {
    fn from(addresses: Vec<&str>) -> Self {
        Self(addresses.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for ProbeTargets {
    fn from(addresses: &[String]) -> Self {
        Self(addresses.to_vec())
    }
}

impl From<&[&str]> for ProbeTargets {
    fn from(addresses: &[&str]) -> Self {
        Self(addresses.iter().map(|a| a.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ProbeTargets {
    fn from(addresses: [&str; N]) -> Self {
        Self(addresses.iter().map(|a| a.to_string()).collect())
    }
}

/// True if every target accepts a TCP connection on `port`.
pub async fn is_reachable(
    targets: impl Into<ProbeTargets>,
    port: u16,
    probe_timeout: Duration,
) -> bool {
    probe(targets, port, probe_timeout).await.reachable
}

/// [`is_reachable`] on the SSH port with a one second timeout.
pub async fn is_reachable_default(targets: impl Into<ProbeTargets>) -> bool {
    is_reachable(targets, DEFAULT_PROBE_PORT, DEFAULT_PROBE_TIMEOUT).await
}

/// Probes each target in order and reports per-attempt detail.
pub async fn probe(
    targets: impl Into<ProbeTargets>,
    port: u16,
    probe_timeout: Duration,
) -> ProbeReport {
    let ProbeTargets(targets) = targets.into();
    let mut report = ProbeReport {
        reachable: true,
        addresses: Vec::with_capacity(targets.len()),
    };

    for target in targets {
        let result: AddressProbe = probe_address(&target, port, probe_timeout).await;
        let reachable: bool = result.is_reachable();
        report.addresses.push(result);
        if !reachable {
            report.reachable = false;
            break;
        }
    }

    report
}

/// Tries IPv4 then IPv6, stopping at the first family that connects.
pub async fn probe_address(address: &str, port: u16, probe_timeout: Duration) -> AddressProbe {
    let bare: &str = address::to_bare(address);
    let mut result = AddressProbe {
        address: address.to_string(),
        connected: None,
        failures: Vec::new(),
    };

    for family in AddressFamily::ALL {
        match connect(bare, family, port, probe_timeout).await {
            Ok(()) => {
                debug!("{address} accepted a connection on port {port} over {family}");
                result.connected = Some(family);
                break;
            }
            Err(kind) => {
                debug!("{address} not reachable on port {port} over {family}: {kind:?}");
                result.failures.push(ProbeFailure {
                    address: address.to_string(),
                    family,
                    kind,
                });
            }
        }
    }

    result
}

/// A single connect attempt in one family. The stream is dropped, and the
/// socket closed, as soon as the handshake completes.
pub async fn connect(
    address: &str,
    family: AddressFamily,
    port: u16,
    probe_timeout: Duration,
) -> Result<(), FailureKind> {
    let attempt = async {
        let socket_addr: SocketAddr = socket_addr_for(address, family, port).await?;
        TcpStream::connect(socket_addr).await?;
        Ok::<(), FailureKind>(())
    };

    match timeout(probe_timeout, attempt).await {
        Ok(result) => result,
        Err(_elapsed) => Err(FailureKind::TimedOut),
    }
}

async fn socket_addr_for(
    address: &str,
    family: AddressFamily,
    port: u16,
) -> Result<SocketAddr, FailureKind> {
    if let Ok(ip) = address.parse::<IpAddr>() {
        return if family.matches(&ip) {
            Ok(SocketAddr::new(ip, port))
        } else {
            Err(FailureKind::FamilyMismatch)
        };
    }

    let mut candidates = net::lookup_host((address, port))
        .await
        .map_err(|_| FailureKind::Unresolvable)?;
    candidates
        .find(|candidate| family.matches(&candidate.ip()))
        .ok_or(FailureKind::Unresolvable)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_secs(1);

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn is_reachable_with_open_loopback_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port: u16 = listener.local_addr().unwrap().port();
        assert!(is_reachable("127.0.0.1", port, TIMEOUT).await);
    }

    #[tokio::test]
    async fn is_reachable_fails_on_closed_port() {
        let port: u16 = closed_port().await;
        let report: ProbeReport = probe("127.0.0.1", port, TIMEOUT).await;
        assert!(!report.reachable);

        let kinds: Vec<FailureKind> = report.failures().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FailureKind::Refused, FailureKind::FamilyMismatch]);
    }

    #[tokio::test]
    async fn all_targets_must_be_reachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port: u16 = listener.local_addr().unwrap().port();

        assert!(is_reachable(["127.0.0.1", "localhost"], port, TIMEOUT).await);
        assert!(!is_reachable(["127.0.0.1", "::1"], port, TIMEOUT).await);
    }

    #[tokio::test]
    async fn probe_stops_at_first_unreachable_address() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port: u16 = listener.local_addr().unwrap().port();

        let report: ProbeReport = probe(vec!["::1", "127.0.0.1"], port, TIMEOUT).await;
        assert!(!report.reachable);
        assert_eq!(report.addresses.len(), 1);
        assert_eq!(report.addresses[0].address, "::1");
    }

    #[tokio::test]
    async fn bracketed_ipv6_literal_is_probed_bare() {
        let Ok(listener) = TcpListener::bind("[::1]:0").await else {
            eprintln!("Skipping IPv6 probe test: no IPv6 loopback available.");
            return;
        };
        let port: u16 = listener.local_addr().unwrap().port();

        let report: ProbeReport = probe("[::1]", port, TIMEOUT).await;
        assert!(report.reachable);
        assert_eq!(report.addresses[0].connected, Some(AddressFamily::Ipv6));
        assert_eq!(
            report.addresses[0].failures[0].kind,
            FailureKind::FamilyMismatch
        );
    }

    #[tokio::test]
    async fn unresolvable_name_is_not_an_error() {
        let report: ProbeReport =
            probe("definitely-invalid-hostname-xyz123.invalid", 22, TIMEOUT).await;
        assert!(!report.reachable);
        assert!(report.failures().all(|f| f.kind == FailureKind::Unresolvable
            || f.kind == FailureKind::TimedOut));
    }

    #[tokio::test]
    async fn default_probe_uses_ssh_port_and_one_second_timeout() {
        assert_eq!(DEFAULT_PROBE_PORT, 22);
        assert_eq!(DEFAULT_PROBE_TIMEOUT, Duration::from_secs(1));
        assert!(is_reachable_default(Vec::<String>::new()).await);

        let started = tokio::time::Instant::now();
        let by_default: bool = is_reachable_default("127.0.0.1").await;
        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(by_default, is_reachable("127.0.0.1", 22, TIMEOUT).await);
    }

    #[tokio::test]
    async fn empty_target_list_is_trivially_reachable() {
        assert!(is_reachable(Vec::<String>::new(), 22, TIMEOUT).await);
    }

    #[tokio::test]
    #[ignore]
    async fn probe_should_timeout_on_unroutable_ip() {
        let report: ProbeReport = probe("203.0.113.1", 22, Duration::from_millis(100)).await;
        assert!(!report.reachable);
        assert_eq!(report.addresses[0].failures[0].kind, FailureKind::TimedOut);
    }
}
