//! Log file reader with automatic decompression.
//!
//! Cowrie rotates its log daily and rotated files are usually compressed.
//! [`open_log`] detects `.gz` and `.zst` by extension and returns a reader
//! that decompresses on the fly, so rotated logs can be analyzed without
//! unpacking them first.
//!
//! The returned reader yields raw bytes; callers wrap it in a `BufReader`
//! and iterate lines. Invalid UTF-8 in the file surfaces as an I/O error
//! from `lines()` and aborts the scan, which is the intended behavior for
//! a corrupt log.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens a log file, decompressing `.gz` and `.zst` transparently.
///
/// Any other extension (or none) is treated as plain text. The file handle
/// is owned by the returned reader and closed when it is dropped, on every
/// exit path.
pub fn open_log(path: impl AsRef<Path>) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Ok(Box::new(GzDecoder::new(file))),
        Some("zst") => {
            let decoder = zstd::Decoder::new(file)
                .with_context(|| format!("Failed to read zstd log: {}", path.display()))?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_plain_log() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "first event").unwrap();
        writeln!(temp, "second event").unwrap();
        temp.flush().unwrap();

        let reader = BufReader::new(open_log(temp.path()).unwrap());
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().unwrap();
        assert_eq!(lines, vec!["first event", "second event"]);
    }

    #[test]
    fn test_gzip_log() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut temp = NamedTempFile::with_suffix(".gz").unwrap();
        {
            let mut encoder = GzEncoder::new(&mut temp, Compression::default());
            writeln!(encoder, "rotated event").unwrap();
            encoder.finish().unwrap();
        }
        temp.flush().unwrap();

        let reader = BufReader::new(open_log(temp.path()).unwrap());
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().unwrap();
        assert_eq!(lines, vec!["rotated event"]);
    }

    #[test]
    fn test_zstd_log() {
        let mut temp = NamedTempFile::with_suffix(".zst").unwrap();
        {
            let mut encoder = zstd::Encoder::new(&mut temp, 3).unwrap();
            writeln!(encoder, "rotated event").unwrap();
            encoder.finish().unwrap();
        }
        temp.flush().unwrap();

        let reader = BufReader::new(open_log(temp.path()).unwrap());
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().unwrap();
        assert_eq!(lines, vec!["rotated event"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(open_log("/nonexistent/cowrie.log").is_err());
    }
}
