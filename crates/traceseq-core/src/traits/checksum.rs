//! Content digests of files.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::constants::{CHECKSUM_BUFFER_SIZE, DEFAULT_CHECKSUM_ALGORITHM};
use crate::errors::ChecksumError;

/// Computes a stable content digest for a file's bytes.
pub trait ChecksumProvider: Send + Sync {
    /// Lowercase hex digest of the file at `path`.
    fn checksum(&self, path: &Path) -> Result<String, ChecksumError>;

    /// Algorithm name, for diagnostics.
    fn algorithm(&self) -> &'static str;
}

/// Streaming SHA-256 over the file contents.
#[derive(Debug, Clone)]
pub struct Sha256FileChecksum {
    buffer_size: usize,
}

impl Sha256FileChecksum {
    pub fn new() -> Self {
        Self {
            buffer_size: CHECKSUM_BUFFER_SIZE,
        }
    }

    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }
}

impl Default for Sha256FileChecksum {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecksumProvider for Sha256FileChecksum {
    fn checksum(&self, path: &Path) -> Result<String, ChecksumError> {
        let unreadable = |source| ChecksumError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(unreadable)?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            let read = file.read(&mut buffer).map_err(unreadable)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        let digest = to_hex(&hasher.finalize());
        ::tracing::debug!(path = %path.display(), %digest, "computed file checksum");
        Ok(digest)
    }

    fn algorithm(&self) -> &'static str {
        DEFAULT_CHECKSUM_ALGORITHM
    }
}

/// SHA-256 of an in-memory buffer, lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    to_hex(&Sha256::digest(bytes))
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn file_digest_matches_buffer_digest_across_buffer_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.tsv");
        let contents = b"gene\tcount\nBRCA1\t42\nTP53\t7\n".repeat(100);
        std::fs::write(&path, &contents).unwrap();

        let expected = sha256_hex(&contents);
        assert_eq!(Sha256FileChecksum::new().checksum(&path).unwrap(), expected);
        assert_eq!(
            Sha256FileChecksum::with_buffer_size(7).checksum(&path).unwrap(),
            expected
        );
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Sha256FileChecksum::new()
            .checksum(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, ChecksumError::FileUnreadable { .. }));
    }
}
