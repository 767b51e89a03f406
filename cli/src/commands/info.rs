use std::net::IpAddr;

use colored::*;
use iscsigw_common::config::Config;
use iscsigw_common::lio;
use iscsigw_core::network::interface;
use iscsigw_core::system;

use crate::terminal::{colors, print};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::aligned_line("Hostname", system::short_hostname()?);
    print::aligned_line("Time (UTC)", lio::utc_timestamp());
    print::aligned_line("Ceph conf", cfg.cephconf.display().to_string());
    print::aligned_line("Config dir", cfg.ceph_config_dir.display().to_string());

    let addresses: Vec<IpAddr> = interface::local_ip_addresses();
    if addresses.is_empty() {
        print::print_status("No non-loopback addresses configured");
        return Ok(());
    }

    print::header("local addresses");
    print::as_tree_one_level(to_key_value_pair(&addresses));
    Ok(())
}

fn to_key_value_pair(ips: &[IpAddr]) -> Vec<(String, ColoredString)> {
    ips.iter()
        .map(|ip| match ip {
            IpAddr::V4(ipv4_addr) => {
                let value = ipv4_addr.to_string().color(colors::IPV4_ADDR);
                (String::from("IPv4"), value)
            }
            IpAddr::V6(ipv6_addr) => {
                let value = ipv6_addr.to_string().color(colors::IPV6_ADDR);
                (String::from("IPv6"), value)
            }
        })
        .collect()
}
