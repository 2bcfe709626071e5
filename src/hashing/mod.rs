//! Centralized module for content hashing.
//!
//! The investigation pipeline hashes file contents with SHA-256, streamed in
//! fixed-size chunks so peak memory stays bounded regardless of file size.

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Chunk size for streamed hashing (4KB).
pub const HASH_CHUNK_SIZE: usize = 4096;

/// Files at or above this size are not hashed (300MB).
pub const HASH_SIZE_CEILING: u64 = 300 * 1024 * 1024;

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn sha256_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Computes the SHA-256 digest of everything a reader yields, consuming it in
/// `HASH_CHUNK_SIZE` chunks. Returns the digest as a hex string.
pub fn sha256_reader<R: Read>(reader: &mut R) -> Result<String> {
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; HASH_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the streamed SHA-256 digest of a file on disk.
pub fn sha256_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path)?;
    sha256_reader(&mut file)
}
