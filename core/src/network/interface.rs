use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::datalink::{self, NetworkInterface};

/// Every IPv4/IPv6 address configured on this machine, loopback excluded.
///
/// Link-local IPv6 addresses are skipped: they only make sense together with
/// a zone id and cannot be used as portal addresses.
pub fn local_ip_addresses() -> Vec<IpAddr> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    collect_addresses(&interfaces)
}

fn collect_addresses(interfaces: &[NetworkInterface]) -> Vec<IpAddr> {
    let mut addresses: BTreeSet<IpAddr> = interfaces
        .iter()
        .flat_map(|interface| interface.ips.iter())
        .map(|network| network.ip())
        .filter(|ip| !is_scoped(ip))
        .collect();

    addresses.remove(&IpAddr::V4(Ipv4Addr::LOCALHOST));
    addresses.remove(&IpAddr::V6(Ipv6Addr::LOCALHOST));

    addresses.into_iter().collect()
}

fn is_scoped(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => false,
        IpAddr::V6(ipv6) => ipv6.is_unicast_link_local(),
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
