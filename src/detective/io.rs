//! Bounded I/O helpers for evidence collection.
//!
//! Every stage that touches file bytes reads through an explicit size cap, so
//! a hostile or oversized input can never balloon memory use.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Maximum size to read for signature sniffing (4KB)
pub const MAX_SNIFF_SIZE: usize = 4096;

/// Files below this size are decoded whole in the content-sampling stage (10KB)
pub const WHOLE_TEXT_CUTOFF: u64 = 10240;

/// Maximum raw bytes sampled for string extraction (1MB)
pub const MAX_SAMPLE_SIZE: usize = 1024 * 1024;

/// Read up to `limit` bytes from the start of a file.
///
/// Short files yield fewer bytes without error; the cap only bounds the read.
pub fn read_prefix<P: AsRef<Path>>(path: P, limit: usize) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut buf = Vec::new();
    file.take(limit as u64).read_to_end(&mut buf)?;
    debug!(
        path = %path.display(),
        limit = limit,
        read = buf.len(),
        "read bounded prefix"
    );
    Ok(buf)
}
