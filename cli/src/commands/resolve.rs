use std::net::IpAddr;

use colored::*;
use iscsigw_common::config::Config;
use iscsigw_core::network::resolver::{AddressResolver, Resolution};
use tracing::debug;

use crate::terminal::{colors, print};

pub async fn resolve(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let resolver = AddressResolver::new(cfg);
    let resolution: Resolution = resolver.resolve(address).await;

    for failure in &resolution.failures {
        debug!("{} lookup for {address} failed: {}", failure.family, failure.reason);
    }

    if resolution.is_empty() {
        anyhow::bail!("{address} did not resolve to any address");
    }

    print::tree_head(0, address);
    let details: Vec<(String, ColoredString)> = resolution
        .addresses
        .iter()
        .map(|addr| match addr.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => ("IPv6".to_string(), addr.as_str().color(colors::IPV6_ADDR)),
            _ => ("IPv4".to_string(), addr.as_str().color(colors::IPV4_ADDR)),
        })
        .collect();
    print::as_tree_one_level(details);
    Ok(())
}
