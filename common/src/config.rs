use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CEPH_CONF: &str = "/etc/ceph/ceph.conf";
pub const DEFAULT_CEPH_CONFIG_DIR: &str = "/etc/ceph";
pub const DEFAULT_PRIV_KEY: &str = "iscsi-gateway.key";
pub const DEFAULT_PUB_KEY: &str = "iscsi-gateway-pub.key";

/// SSH is the one port every gateway node is expected to expose.
pub const DEFAULT_PROBE_PORT: u16 = 22;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings shared by the gateway helpers.
///
/// Passed explicitly to whatever needs it; nothing in the workspace reads
/// configuration from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cluster configuration file handed to storage-cluster clients.
    pub cephconf: PathBuf,
    /// Directory holding the cluster configuration and gateway key pair.
    pub ceph_config_dir: PathBuf,
    /// File name of the gateway private key inside `ceph_config_dir`.
    pub priv_key: String,
    /// File name of the gateway public key inside `ceph_config_dir`.
    pub pub_key: String,
    /// TCP port used by reachability probes.
    pub probe_port: u16,
    /// Upper bound for a single connect attempt.
    pub probe_timeout: Duration,
    /// Upper bound for a single forward lookup of one address family.
    pub resolve_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cephconf: PathBuf::from(DEFAULT_CEPH_CONF),
            ceph_config_dir: PathBuf::from(DEFAULT_CEPH_CONFIG_DIR),
            priv_key: DEFAULT_PRIV_KEY.to_string(),
            pub_key: DEFAULT_PUB_KEY.to_string(),
            probe_port: DEFAULT_PROBE_PORT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
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
