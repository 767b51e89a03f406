use std::path::PathBuf;

use iscsigw_core::hash::{self, HashType};
use rayon::prelude::*;
use tracing::warn;

use crate::terminal::print;

pub fn hash(files: &[PathBuf], hash_type: HashType) -> anyhow::Result<()> {
    let digests: Vec<(&PathBuf, String)> = files
        .par_iter()
        .map(|path| (path, hash::file_hash(path, hash_type)))
        .collect();

    let mut unreadable: usize = 0;
    for (path, digest) in digests {
        if digest.is_empty() {
            warn!("{} could not be read", path.display());
            unreadable += 1;
            continue;
        }
        print::print(&format!("{digest}  {}", path.display()));
    }

    if unreadable > 0 {
        anyhow::bail!("{unreadable} file(s) could not be hashed with {hash_type}");
    }
    Ok(())
}
