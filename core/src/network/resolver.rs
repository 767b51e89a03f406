use std::collections::BTreeSet;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use async_trait::async_trait;
use iscsigw_common::config::{Config, DEFAULT_RESOLVE_TIMEOUT};
use iscsigw_common::network::address::{self, AddressFamily};
use tokio::net;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Forward name lookup for a single address family.
#[async_trait]
pub trait ForwardLookup: Send + Sync {
    async fn lookup(&self, host: &str, family: AddressFamily) -> io::Result<Vec<IpAddr>>;
}

/// Resolves names through the operating system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

#[async_trait]
impl ForwardLookup for SystemLookup {
    async fn lookup(&self, host: &str, family: AddressFamily) -> io::Result<Vec<IpAddr>> {
        let ips: Vec<IpAddr> = net::lookup_host((host, 0u16))
            .await?
            .map(|socket_addr| socket_addr.ip())
            .filter(|ip| family.matches(ip))
            .collect();

        if ips.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {family} address for {host}"),
            ));
        }
        Ok(ips)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub family: AddressFamily,
    pub reason: String,
}

/// Addresses a name resolved to, in bare form, plus any family that failed.
///
/// An empty `addresses` set means the name could not be resolved at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub addresses: BTreeSet<String>,
    pub failures: Vec<LookupFailure>,
}

impl Resolution {
    fn literal(address: &str) -> Self {
        Self {
            addresses: BTreeSet::from([address.to_string()]),
            failures: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

pub struct AddressResolver<L = SystemLookup> {
    lookup: L,
    lookup_timeout: Duration,
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl AddressResolver {
    pub fn new(cfg: &Config) -> Self {
        Self::with_lookup(SystemLookup, cfg.resolve_timeout)
    }

    /// System resolver with the default lookup timeout.
    pub fn system() -> Self {
        Self::with_lookup(SystemLookup, DEFAULT_RESOLVE_TIMEOUT)
    }
}

impl<L: ForwardLookup> AddressResolver<L> {
    pub fn with_lookup(lookup: L, lookup_timeout: Duration) -> Self {
        Self {
            lookup,
            lookup_timeout,
        }
    }

    /// Expands an address or host name into the concrete addresses it
    /// denotes.
    ///
    /// IP literals (bracketed or not) come back as-is without touching DNS.
    /// Names are looked up once per family; a family that fails or times out
    /// is skipped and recorded in [`Resolution::failures`].
    pub async fn resolve(&self, address: &str) -> Resolution {
        let bare: &str = address::to_bare(address);

        if bare.parse::<Ipv4Addr>().is_ok() || bare.parse::<Ipv6Addr>().is_ok() {
            return Resolution::literal(bare);
        }

        let mut resolution = Resolution::default();
        for family in AddressFamily::ALL {
            match timeout(self.lookup_timeout, self.lookup.lookup(bare, family)).await {
                Ok(Ok(ips)) => {
                    resolution
                        .addresses
                        .extend(ips.iter().map(IpAddr::to_string));
                }
                Ok(Err(err)) => resolution.failures.push(LookupFailure {
                    family,
                    reason: err.to_string(),
                }),
                Err(_elapsed) => resolution.failures.push(LookupFailure {
                    family,
                    reason: format!("lookup timed out after {:?}", self.lookup_timeout),
                }),
            }
        }

        if resolution.is_empty() {
            warn!("Unable to resolve {bare} to any address");
        } else {
            debug!("Resolved {bare} to {:?}", resolution.addresses);
        }
        resolution
    }
}

/// Resolves with the system resolver and default timeout, discarding
/// diagnostics.
pub async fn resolve_ip_addresses(address: &str) -> BTreeSet<String> {
    AddressResolver::system().resolve(address).await.addresses
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
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned answers per family; families without an entry fail.
    #[derive(Default)]
    struct StaticLookup {
        answers: HashMap<AddressFamily, Vec<IpAddr>>,
        calls: AtomicUsize,
        stall: bool,
    }

    impl StaticLookup {
        fn with(mut self, family: AddressFamily, ips: &[&str]) -> Self {
            let ips: Vec<IpAddr> = ips.iter().map(|ip| ip.parse().unwrap()).collect();
            self.answers.insert(family, ips);
            self
        }
    }

    #[async_trait]
    impl ForwardLookup for StaticLookup {
        async fn lookup(&self, host: &str, family: AddressFamily) -> io::Result<Vec<IpAddr>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if self.stall {
                std::future::pending::<()>().await;
            }
            self.answers.get(&family).cloned().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("{host}: no {family}"))
            })
        }
    }

    fn resolver(lookup: StaticLookup) -> AddressResolver<StaticLookup> {
        AddressResolver::with_lookup(lookup, Duration::from_millis(50))
    }

    #[tokio::test]
    async fn literals_skip_dns() {
        let resolver = resolver(StaticLookup::default());

        let v4: Resolution = resolver.resolve("127.0.0.1").await;
        assert_eq!(v4.addresses, BTreeSet::from(["127.0.0.1".to_string()]));

        let v6: Resolution = resolver.resolve("::1").await;
        assert_eq!(v6.addresses, BTreeSet::from(["::1".to_string()]));

        let bracketed: Resolution = resolver.resolve("[fe80::1]").await;
        assert_eq!(bracketed.addresses, BTreeSet::from(["fe80::1".to_string()]));

        assert_eq!(resolver.lookup.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn names_collect_both_families() {
        let lookup = StaticLookup::default()
            .with(AddressFamily::Ipv4, &["192.168.122.11", "192.168.122.11"])
            .with(AddressFamily::Ipv6, &["2001:db8::11"]);
        let resolution: Resolution = resolver(lookup).resolve("gw1.example.com").await;

        assert_eq!(
            resolution.addresses,
            BTreeSet::from(["192.168.122.11".to_string(), "2001:db8::11".to_string()])
        );
        assert!(resolution.failures.is_empty());
    }

    #[tokio::test]
    async fn failed_family_is_skipped() {
        let lookup = StaticLookup::default().with(AddressFamily::Ipv6, &["2001:db8::12"]);
        let resolution: Resolution = resolver(lookup).resolve("gw2.example.com").await;

        assert_eq!(resolution.addresses, BTreeSet::from(["2001:db8::12".to_string()]));
        assert_eq!(resolution.failures.len(), 1);
        assert_eq!(resolution.failures[0].family, AddressFamily::Ipv4);
    }

    #[tokio::test]
    async fn unresolvable_name_yields_empty_set() {
        let resolution: Resolution = resolver(StaticLookup::default())
            .resolve("definitely-invalid-hostname-xyz123")
            .await;
        assert!(resolution.is_empty());
        assert_eq!(resolution.failures.len(), 2);
    }

    #[tokio::test]
    async fn stalled_lookup_is_bounded_by_timeout() {
        let lookup = StaticLookup {
            stall: true,
            ..StaticLookup::default()
        };
        let resolution: Resolution = resolver(lookup).resolve("slow.example.com").await;
        assert!(resolution.is_empty());
        assert!(resolution.failures[0].reason.contains("timed out"));
    }

    #[tokio::test]
    async fn system_lookup_handles_literals_and_garbage() {
        assert_eq!(
            resolve_ip_addresses("127.0.0.1").await,
            BTreeSet::from(["127.0.0.1".to_string()])
        );
        assert_eq!(
            resolve_ip_addresses("::1").await,
            BTreeSet::from(["::1".to_string()])
        );
        assert!(resolve_ip_addresses("definitely-invalid-hostname-xyz123").await.is_empty());
    }

    #[tokio::test]
    async fn system_lookup_resolves_localhost() {
        let resolution: Resolution = AddressResolver::system().resolve("localhost").await;
        assert!(
            resolution.addresses.contains("127.0.0.1") || resolution.addresses.contains("::1"),
            "localhost resolved to {:?}",
            resolution.addresses
        );
    }
}
