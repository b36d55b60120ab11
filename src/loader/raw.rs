//! Raw f32 dump loader
//!
//! Reads headerless binary files produced by backend output dumps. The file
//! is a flat run of IEEE-754 `f32` values in native byte order.

use byteorder::{ByteOrder, NativeEndian};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Size of one element in bytes
pub const F32_SIZE: usize = std::mem::size_of::<f32>();

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("IO error reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid f32 dump {}: {len} bytes is not a positive multiple of 4", path.display())]
    Format { path: PathBuf, len: usize },
}

pub type LoaderResult<T> = Result<T, LoaderError>;

/// What to do with bytes after the last whole element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytes {
    /// Drop the partial element, keeping `len / 4` values
    #[default]
    Truncate,
    /// Fail unless the length is a positive multiple of 4
    Reject,
}

/// Load a raw native-endian f32 file fully into memory.
///
/// The file handle lives only for the duration of this call.
pub fn load_f32_file<P: AsRef<Path>>(path: P, policy: TrailingBytes) -> LoaderResult<Vec<f32>> {
    let path = path.as_ref();
    let bytes = read_all(path)?;

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    decode_f32(&bytes, policy).ok_or_else(|| LoaderError::Format {
        path: path.to_path_buf(),
        len: bytes.len(),
    })
}

/// Decode a byte buffer into f32 values.
///
/// Returns `None` only when `policy` is [`TrailingBytes::Reject`] and the
/// buffer length is zero or not a multiple of 4.
pub fn decode_f32(bytes: &[u8], policy: TrailingBytes) -> Option<Vec<f32>> {
    let trailing = bytes.len() % F32_SIZE;
    if policy == TrailingBytes::Reject && (bytes.is_empty() || trailing != 0) {
        return None;
    }
    if trailing != 0 {
        tracing::warn!(
            "Dropping {} trailing byte(s) after {} whole f32 values",
            trailing,
            bytes.len() / F32_SIZE
        );
    }

    let whole = &bytes[..bytes.len() - trailing];
    let mut values = vec![0.0f32; whole.len() / F32_SIZE];
    NativeEndian::read_f32_into(whole, &mut values);
    Some(values)
}

fn read_all(path: &Path) -> LoaderResult<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoaderError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let capacity = file
        .metadata()
        .ok()
        .and_then(|m| usize::try_from(m.len()).ok())
        .unwrap_or(0);
    let mut bytes = Vec::with_capacity(capacity);
    file.read_to_end(&mut bytes).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}
