use colored::*;
use iscsigw_common::config::Config;
use iscsigw_common::network::address;
use iscsigw_core::network::tcp::{self, AddressProbe, ProbeReport};

use crate::terminal::{colors, print, spinner};

pub async fn probe(addresses: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let total: usize = addresses.len();
    let pb = spinner::start(format!(
        "Probing {} address(es) on port {}...",
        total.to_string().green().bold(),
        cfg.probe_port
    ));

    let report: ProbeReport = tcp::probe(addresses, cfg.probe_port, cfg.probe_timeout).await;
    pb.finish_and_clear();

    for (idx, result) in report.addresses.iter().enumerate() {
        print::tree_head(idx, &address::with_port(&result.address, cfg.probe_port));
        print::as_tree_one_level(details(result));
    }

    print::fat_separator();
    if report.reachable {
        let summary: String = format!("All {total} address(es) reachable on port {}", cfg.probe_port);
        print::centerln(&summary.green().bold().to_string());
        Ok(())
    } else {
        let skipped: usize = total - report.addresses.len();
        if skipped > 0 {
            print::print_status(format!("{skipped} address(es) not probed"));
        }
        anyhow::bail!("reachability check failed on port {}", cfg.probe_port)
    }
}

fn details(result: &AddressProbe) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = result
        .failures
        .iter()
        .map(|failure| {
            (
                failure.family.to_string(),
                format!("{:?}", failure.kind).color(colors::REMOVED),
            )
        })
        .collect();

    if let Some(family) = result.connected {
        details.push((family.to_string(), "Connected".color(colors::ADDED)));
    }
    details
}
