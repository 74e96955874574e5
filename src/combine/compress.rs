//! Gzip Encoding
//!
//! Produces the compressed artifact variant. The negotiator may accept a
//! client's `deflate` token, but the compressed variant is always gzip.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{CombineError, Result};

// == Gzip Compress ==
/// Compresses an artifact with gzip at the default level.
pub fn gzip_compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| CombineError::Internal(format!("gzip encoding failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| CombineError::Internal(format!("gzip encoding failed: {}", e)))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut decoder = GzDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_roundtrip() {
        let data = b"var a=1;var b=\"// not a comment\";";
        let compressed = gzip_compress(data).unwrap();
        assert_eq!(gunzip(&compressed), data);
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let data = b"var x=0;".repeat(500);
        let compressed = gzip_compress(&data).unwrap();
        assert!(compressed.len() < data.len() / 10);
    }

    #[test]
    fn test_empty_input() {
        let compressed = gzip_compress(b"").unwrap();
        assert_eq!(gunzip(&compressed), b"");
    }
}
