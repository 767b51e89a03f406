mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, address, diff, hash, info, probe, resolve, size};
use iscsigw_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let mut cfg = Config {
        cephconf: commands.cephconf,
        ..Config::default()
    };

    match commands.command {
        Commands::Literal { address } => {
            address::literal(&address);
            Ok(())
        }
        Commands::Bare { address } => {
            address::bare(&address);
            Ok(())
        }
        Commands::Resolve { address } => {
            print::header("resolving");
            resolve::resolve(&address, &cfg).await
        }
        Commands::Probe {
            addresses,
            port,
            timeout_ms,
        } => {
            cfg.probe_port = port;
            cfg.probe_timeout = Duration::from_millis(timeout_ms);
            print::header("checking reachability");
            probe::probe(addresses, &cfg).await
        }
        Commands::Diff { current, new } => {
            print::header("list reconciliation");
            diff::diff(current, new);
            Ok(())
        }
        Commands::Size { sizes } => size::size(&sizes),
        Commands::Hash { hash_type, files } => hash::hash(&files, hash_type),
        Commands::Info => {
            print::header("gateway host");
            info::info(&cfg)
        }
    }
}
