//! Bit-packed (de)serialized form of a PSS/NSS array pair.
//!
//! Generalizes a single packed array (as for one suffix array) to a pair:
//! PSS and NSS share the same bit width, since both are bounded by the
//! sentinel value `n`. Gated behind the `pack` feature.

use bincode::config as bincode_config;
use bitpacking::{BitPacker, BitPacker4x as Packer};
use serde::{Deserialize, Serialize};
use std::io::prelude::*;
use std::io::Result;

// Little-endian of b"NSSP", i.e. packed Nearest-Smaller-Suffix Pair.
const MAGIC_NSSP: u32 = 0x5053_534e;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedArrays {
    magic: u32,
    length: u32,
    pss: Vec<u8>,
    nss: Vec<u8>,
}

impl PackedArrays {
    pub fn from_arrays(pss: &[u32], nss: &[u32]) -> Self {
        assert_eq!(pss.len(), nss.len());
        assert!(pss.len() as u64 <= u32::MAX as u64);

        // Both arrays share the sentinel value n as their maximum possible
        // entry, so one bit width covers both.
        let bits = array_bits(pss.len() as u32);
        PackedArrays {
            magic: MAGIC_NSSP,
            length: pss.len() as u32,
            pss: pack_one(pss, bits),
            nss: pack_one(nss, bits),
        }
    }

    pub fn into_arrays(self) -> (Vec<u32>, Vec<u32>) {
        assert_eq!(self.magic, MAGIC_NSSP);
        let bits = array_bits(self.length);
        let pss = unpack_one(&self.pss, self.length as usize, bits);
        let nss = unpack_one(&self.nss, self.length as usize, bits);
        (pss, nss)
    }

    pub fn dump<W: Write>(&self, file: W) -> Result<()> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.serialize_into(file, self).map_err(error_conv)
    }

    pub fn dump_bytes(&self) -> Result<Vec<u8>> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.serialize(self).map_err(error_conv)
    }

    pub fn load<R: Read>(file: R) -> Result<Self> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.deserialize_from(file).map_err(error_conv)
    }

    pub fn load_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.deserialize(bytes).map_err(error_conv)
    }
}

fn array_bits(length: u32) -> u8 {
    // length itself is a representable value (the "no smaller suffix"
    // sentinel), so the bit width must cover `length`, not `length - 1`.
    (32 - length.leading_zeros().min(31)) as u8
}

fn pack_one(values: &[u32], bits: u8) -> Vec<u8> {
    let mut values = values;
    let u32_chunk_size = Packer::BLOCK_LEN;
    let u8_chunk_size = bits as usize * Packer::BLOCK_LEN / 8;
    let chunk_count = ceiling_div(values.len(), u32_chunk_size);

    let packer = Packer::new();
    let mut data = Vec::with_capacity(u8_chunk_size * chunk_count);
    let mut buf = vec![0u8; u8_chunk_size];
    while values.len() >= u32_chunk_size {
        let (chunk, tail) = values.split_at(u32_chunk_size);
        packer.compress(chunk, &mut buf[..], bits);
        data.extend_from_slice(&buf[..]);
        values = tail;
    }
    if !values.is_empty() {
        let mut chunk = vec![0; u32_chunk_size];
        chunk[..values.len()].copy_from_slice(values);
        packer.compress(&chunk[..], &mut buf[..], bits);

        let mut tail = buf.len();
        while tail > 0 && buf[tail - 1] == 0 {
            tail -= 1;
        }
        data.extend_from_slice(&buf[..tail]);
    }
    data
}

fn unpack_one(data: &[u8], length: usize, bits: u8) -> Vec<u32> {
    let u32_chunk_size = Packer::BLOCK_LEN;
    let u8_chunk_size = bits as usize * Packer::BLOCK_LEN / 8;

    let packer = Packer::new();
    let mut data = data;
    let mut remain = length;
    let mut out = Vec::with_capacity(remain);
    let mut buf = vec![0u32; u32_chunk_size];
    while data.len() >= u8_chunk_size && remain > 0 {
        let (chunk, tail) = data.split_at(u8_chunk_size);
        packer.decompress(chunk, &mut buf[..], bits);
        let n = if tail.is_empty() { remain } else { u32_chunk_size };
        out.extend_from_slice(&buf[..n]);
        data = tail;
        remain -= n;
    }
    if !data.is_empty() && remain > 0 {
        let mut chunk = vec![0; u8_chunk_size];
        chunk[..data.len()].copy_from_slice(data);
        packer.decompress(&chunk[..], &mut buf[..], bits);
        out.extend_from_slice(&buf[..remain]);
    }
    out
}

fn ceiling_div(x: usize, y: usize) -> usize {
    x / y + usize::from(x % y != 0)
}

fn error_conv(err: bincode::Error) -> std::io::Error {
    use bincode::ErrorKind as BincodeErrorKind;
    use std::io::{Error, ErrorKind as IoErrorKind};

    match *err {
        BincodeErrorKind::Io(e) => e,
        BincodeErrorKind::SizeLimit => Error::new(IoErrorKind::Other, BincodeErrorKind::SizeLimit),
        BincodeErrorKind::Custom(e) => Error::new(IoErrorKind::Other, e),
        e => Error::new(IoErrorKind::InvalidData, e),
    }
}
