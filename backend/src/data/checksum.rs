//! Checksum calculation for dataset cache validation.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of raw dataset bytes.
///
/// Returns the hexadecimal string representation of the hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"latitude,longitude\n51.5,-0.1\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        let a = calculate_checksum(b"latitude,longitude\n51.5,-0.1\n");
        let b = calculate_checksum(b"latitude,longitude\n51.6,-0.1\n");
        assert_ne!(a, b);
    }
}
