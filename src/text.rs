//! Text loading: reads a file, frees up the sentinel byte value if it's in
//! use, and pads with a single `0x00` sentinel at each end.
//!
//! A small `std::fs`/`Result`-returning helper rather than a dedicated I/O
//! abstraction, matching how this crate's other small file-handling code is
//! shaped.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// A loaded, sentinel-padded text ready to be handed to an LCE index or the
/// XSS constructor. `bytes[0] == bytes[bytes.len() - 1] == 0x00`, and `0x00`
/// does not occur anywhere else in `bytes`.
pub struct Text {
    pub bytes: Vec<u8>,
}

impl Text {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() <= 2
    }
}

/// Load `path`, optionally capped to its first `length_cap` bytes, and
/// return a sentinel-padded [`Text`].
pub fn load(path: &Path, length_cap: Option<usize>) -> Result<Text, LoadError> {
    if length_cap == Some(0) {
        return Err(LoadError::ZeroLengthCap);
    }

    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if raw.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let capped = match length_cap {
        Some(cap) => &raw[..raw.len().min(cap)],
        None => &raw[..],
    };

    Ok(Text {
        bytes: standardize_sentinel(capped),
    })
}

/// Build a [`Text`] directly from in-memory bytes (used by tests and by
/// callers that already have the content loaded).
pub fn from_bytes(content: &[u8]) -> Text {
    Text {
        bytes: standardize_sentinel(content),
    }
}

fn standardize_sentinel(content: &[u8]) -> Vec<u8> {
    let has_zero = content.iter().any(|&b| b == 0x00);
    let has_max = content.iter().any(|&b| b == 0xFF);

    let mut body: Vec<u8> = if !has_zero {
        content.to_vec()
    } else if !has_max {
        content.iter().map(|&b| b + 1).collect()
    } else {
        log::warn!(
            "input uses both 0x00 and 0xFF; incrementing stray 0x00 bytes to 0x01, which may perturb suffix order"
        );
        content
            .iter()
            .map(|&b| if b == 0x00 { 0x01 } else { b })
            .collect()
    };

    let mut padded = Vec::with_capacity(body.len() + 2);
    padded.push(0x00);
    padded.append(&mut body);
    padded.push(0x00);
    padded
}
