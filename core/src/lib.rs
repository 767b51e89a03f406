//! I/O-bearing gateway helpers: name resolution, TCP reachability probes,
//! local interface addresses, host name and file checksums.

pub mod hash;
pub mod network;
pub mod system;
