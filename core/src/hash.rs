//! Checksums of configuration files, used to detect on-disk changes.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use digest::Digest;
use iscsigw_common::GatewayError;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use tracing::warn;

const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashType {
    Sha1,
    #[default]
    Sha256,
    Sha512,
    Md5,
}

impl FromStr for HashType {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "md5" => Ok(Self::Md5),
            other => Err(GatewayError::invalid(format!("unsupported hash type '{other}'"))),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Md5 => "md5",
        };
        f.write_str(name)
    }
}

/// Hex digest of the file at `path`, or an empty string if it cannot be read.
pub fn file_hash(path: impl AsRef<Path>, hash_type: HashType) -> String {
    let path: &Path = path.as_ref();
    match try_file_hash(path, hash_type) {
        Ok(digest) => digest,
        Err(err) => {
            warn!("Unable to hash {}: {err}", path.display());
            String::new()
        }
    }
}

pub fn try_file_hash(path: impl AsRef<Path>, hash_type: HashType) -> io::Result<String> {
    let file: File = File::open(path)?;
    match hash_type {
        HashType::Sha1 => hash_reader::<Sha1>(file),
        HashType::Sha256 => hash_reader::<Sha256>(file),
        HashType::Sha512 => hash_reader::<Sha512>(file),
        HashType::Md5 => hash_reader::<Md5>(file),
    }
}

fn hash_reader<D: Digest>(mut reader: impl Read) -> io::Result<String> {
    let mut hasher = D::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let read: usize = reader.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
