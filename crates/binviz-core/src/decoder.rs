//! File-level decoding: bytes in, point cloud out
//!
//! Ownership moves strictly forward: the byte buffer is dropped once the keys
//! exist, the key buffer is consumed by the mapper, and only the resulting
//! [`DecodedCloud`] survives the call.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::decoder_options::DecoderOptions;
use crate::packed_key::extract_keys;
use crate::point_cloud::DecodedCloud;
use crate::point_mapper::map_points_with;
use crate::status::{BinvizError, StatusResult};

/// Reads the file at `path` and decodes it with default options.
///
/// An unreadable or missing file is an [`BinvizError::IoError`]. A file shorter
/// than three bytes decodes successfully into an empty cloud.
pub fn decode<P: AsRef<Path>>(path: P) -> StatusResult<DecodedCloud> {
    decode_with_options(path, &DecoderOptions::default())
}

pub fn decode_with_options<P: AsRef<Path>>(
    path: P,
    options: &DecoderOptions,
) -> StatusResult<DecodedCloud> {
    let path = path.as_ref();
    let with_path = |err: std::io::Error| {
        BinvizError::IoError(format!("{}: {}", path.display(), err))
    };

    let file = File::open(path).map_err(with_path)?;
    let metadata = file.metadata().map_err(with_path)?;
    options.check_input_len(metadata.len())?;

    let bytes = read_limited(file, options).map_err(|err| match err {
        BinvizError::IoError(msg) => BinvizError::IoError(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    log::info!("Reading {} bytes from {}", bytes.len(), path.display());

    let cloud = decode_bytes_with_options(bytes, options);
    log::info!("{} unique points", cloud.num_points());
    Ok(cloud)
}

/// Reads `reader` to the end, never buffering more than one byte past
/// `max_input_bytes`. The length check does not trust file metadata, which is
/// 0 for `/proc` entries and stale for growing files.
pub fn read_limited<R: Read>(reader: R, options: &DecoderOptions) -> StatusResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match options.get_max_input_bytes() {
        Some(max) => reader.take(max.saturating_add(1)).read_to_end(&mut bytes)?,
        None => BufReader::new(reader).read_to_end(&mut bytes)?,
    };
    options.check_input_len(bytes.len() as u64)?;
    Ok(bytes)
}

/// Decodes an in-memory byte stream. Never fails.
pub fn decode_bytes(bytes: impl Into<Vec<u8>>) -> DecodedCloud {
    decode_bytes_with_options(bytes, &DecoderOptions::default())
}

pub fn decode_bytes_with_options(
    bytes: impl Into<Vec<u8>>,
    options: &DecoderOptions,
) -> DecodedCloud {
    let bytes = bytes.into();
    let bytes_read = bytes.len();
    let keys = extract_keys(&bytes);
    drop(bytes);

    let points = map_points_with(keys, options);
    DecodedCloud::new(points, bytes_read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn decode_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3, 1, 2, 3, 9]).unwrap();

        let cloud = decode(file.path()).unwrap();
        assert_eq!(cloud.num_points(), 1);
        let stats = cloud.stats();
        assert_eq!(stats.bytes_read, 7);
        assert_eq!(stats.num_keys, 2);
        assert_eq!(stats.trailing_bytes, 1);
        assert_eq!(stats.max_count, 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(dir.path().join("absent.bin")).unwrap_err();
        assert!(err.is_io(), "{err}");
        assert!(err.to_string().contains("absent.bin"));
    }

    #[test]
    fn empty_file_is_empty_cloud_not_error() {
        let file = NamedTempFile::new().unwrap();
        let cloud = decode(file.path()).unwrap();
        assert!(cloud.is_empty());
        assert_eq!(cloud.stats(), Default::default());
    }

    #[test]
    fn oversized_input_is_rejected_before_reading() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 12]).unwrap();

        let mut options = DecoderOptions::new();
        options.set_max_input_bytes(9);
        let err = decode_with_options(file.path(), &options).unwrap_err();
        assert!(matches!(err, BinvizError::InvalidParameter(_)));
    }

    #[test]
    fn read_limit_ignores_reported_length() {
        // A reader stands in for a file whose metadata length is 0.
        let mut options = DecoderOptions::new();
        options.set_max_input_bytes(9);

        let err = read_limited(Cursor::new(vec![0u8; 12]), &options).unwrap_err();
        assert!(matches!(err, BinvizError::InvalidParameter(_)));

        let bytes = read_limited(Cursor::new(vec![7u8; 9]), &options).unwrap();
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn read_without_limit_reads_everything() {
        let options = DecoderOptions::new();
        let bytes = read_limited(Cursor::new(vec![1u8; 1000]), &options).unwrap();
        assert_eq!(bytes.len(), 1000);
    }

    #[test]
    fn short_input_is_empty() {
        let cloud = decode_bytes(vec![0xAA, 0xBB]);
        assert!(cloud.is_empty());
        assert_eq!(cloud.stats().trailing_bytes, 2);
        assert_eq!(cloud.stats().bytes_read, 2);
    }
}
