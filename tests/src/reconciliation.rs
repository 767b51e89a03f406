use std::collections::HashSet;
use std::time::Duration;

use iscsigw_common::diff::ListComparison;
use iscsigw_common::network::address;
use iscsigw_core::network::tcp;
use tokio::net::TcpListener;

/// Portal lists mix literal and bare spellings; they are normalized before
/// diffing so `[::1]` and `::1` are the same portal.
#[tokio::test]
async fn new_portals_are_probed_before_commit() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();

    let current: Vec<String> = ["[::1]", "192.168.122.10"]
        .iter()
        .map(|a| address::to_bare(a).to_string())
        .collect();
    let desired: Vec<String> = ["::1", "127.0.0.1", "[fe80::1]"]
        .iter()
        .map(|a| address::to_bare(a).to_string())
        .collect();

    let diff = ListComparison::new(current, desired);
    let added: Vec<String> = diff.added().into_iter().cloned().collect();
    assert_eq!(added, vec!["127.0.0.1".to_string(), "fe80::1".to_string()]);
    assert_eq!(diff.removed(), HashSet::from([&"192.168.122.10".to_string()]));
    assert!(diff.changed());

    let literals: Vec<String> = added.iter().map(|a| address::to_literal(a)).collect();
    assert_eq!(literals, vec!["127.0.0.1", "[fe80::1]"]);

    assert!(tcp::is_reachable(&added[..1], port, Duration::from_secs(1)).await);
    Ok(())
}

#[test]
fn unchanged_configuration_needs_no_work() {
    let diff = ListComparison::new(vec!["rbd/disk_1", "rbd/disk_2"], vec!["rbd/disk_1", "rbd/disk_2"]);
    assert!(diff.added().is_empty());
    assert!(diff.removed().is_empty());
    assert!(!diff.changed());
}
