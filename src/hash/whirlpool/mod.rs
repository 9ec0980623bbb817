//! Whirlpool streaming context
//!
//! `Whirlpool` buffers input into 64-byte blocks, compresses each completed
//! block, and produces the 512-bit digest on demand. Producing a digest works
//! on a copy, so a context can be read any number of times and keep absorbing
//! afterwards.

mod compress;
mod length;
mod tables;

pub use compress::{Block, ChainValue, compress};
pub use length::BitLength;

use crate::hash::error::HashError;
use crate::hash::{HashAlgorithm, HashState, format};
use compress::compress_block;
use digest::core_api::BlockSizeUser;
use digest::generic_array::GenericArray;
use digest::typenum::U64;
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};
use std::io::{self, Read};
use std::path::Path;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 64;

/// Block size in bytes
pub const BLOCK_SIZE: usize = compress::BLOCK_BYTES;

pub const ALGORITHM_NAME: &str = "WHIRLPOOL";

/// Trailing bytes of the final block reserved for the message length.
const LENGTH_FIELD_BYTES: usize = 32;

/// Read size used by `hash_reader`.
const READ_CHUNK: usize = 64 * 1024;

/// Raw digest bytes.
pub type Output = [u8; DIGEST_SIZE];

/// Whirlpool hashing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Whirlpool {
    state: ChainValue,
    bit_length: BitLength,
    buffer: Block,
    buffer_len: usize,
}

impl Whirlpool {
    pub fn new() -> Self {
        Self {
            state: [0; 8],
            bit_length: BitLength::ZERO,
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
        }
    }

    /// Absorb `data`. Splitting input across calls never changes the digest.
    pub fn update(&mut self, mut data: &[u8]) {
        self.bit_length.add_bytes(data.len());

        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            compress_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let blocks = data.chunks_exact(BLOCK_SIZE);
        let rest = blocks.remainder();
        for block in blocks {
            compress_block(&mut self.state, block);
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Absorb `data`, refusing input that would wrap the 256-bit length
    /// counter. The context is unchanged when an error is returned.
    pub fn try_update(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.bit_length.checked_add_bytes(data.len()).is_none() {
            return Err(HashError::LengthOverflow);
        }
        self.update(data);
        Ok(())
    }

    /// Digest of everything absorbed so far.
    pub fn digest(&self) -> Output {
        let mut out = [0u8; DIGEST_SIZE];
        self.clone().finish_into(&mut out);
        out
    }

    pub fn hexdigest(&self) -> String {
        format::to_hex(&self.digest())
    }

    /// Number of message bits absorbed so far.
    pub fn bit_length(&self) -> BitLength {
        self.bit_length
    }

    /// Pad, encode the length and flush the final block(s) of this working
    /// copy.
    fn finish_into(mut self, out: &mut Output) {
        let length_at = BLOCK_SIZE - LENGTH_FIELD_BYTES;

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        if self.buffer_len > length_at {
            self.buffer[self.buffer_len..].fill(0);
            compress_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..length_at].fill(0);
        self.buffer[length_at..].copy_from_slice(&self.bit_length.to_be_bytes());
        compress_block(&mut self.state, &self.buffer);

        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
    }
}

impl Default for Whirlpool {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot digest of `data`.
pub fn hash(data: &[u8]) -> Output {
    let mut hasher = Whirlpool::new();
    hasher.update(data);
    hasher.digest()
}

/// Digest everything `reader` yields, a chunk at a time.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Output> {
    let mut hasher = Whirlpool::new();
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hasher.digest())
}

pub fn hash_file<P: AsRef<Path>>(path: P) -> io::Result<Output> {
    let file = std::fs::File::open(path)?;
    hash_reader(file)
}

impl io::Write for Whirlpool {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Whirlpool::update(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// RustCrypto `digest` integration, so `Whirlpool` works with `digest::Digest`.

impl HashMarker for Whirlpool {}

impl Update for Whirlpool {
    fn update(&mut self, data: &[u8]) {
        Whirlpool::update(self, data);
    }
}

impl OutputSizeUser for Whirlpool {
    type OutputSize = U64;
}

impl BlockSizeUser for Whirlpool {
    type BlockSize = U64;
}

impl FixedOutput for Whirlpool {
    fn finalize_into(self, out: &mut GenericArray<u8, Self::OutputSize>) {
        let mut digest = [0u8; DIGEST_SIZE];
        self.finish_into(&mut digest);
        out.copy_from_slice(&digest);
    }
}

impl Reset for Whirlpool {
    fn reset(&mut self) {
        *self = Self::new();
    }
}

pub struct WhirlpoolAlgorithm;

impl HashAlgorithm for WhirlpoolAlgorithm {
    fn name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn output_size(&self) -> usize {
        DIGEST_SIZE // 512 bits
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE // 512 bits
    }

    fn new_hasher(&self) -> Box<dyn HashState> {
        Box::new(Whirlpool::new())
    }
}

impl HashState for Whirlpool {
    fn update(&mut self, data: &[u8]) {
        Whirlpool::update(self, data);
    }

    fn try_update(&mut self, data: &[u8]) -> Result<(), HashError> {
        Whirlpool::try_update(self, data)
    }

    fn finalize(&self) -> Vec<u8> {
        self.digest().to_vec()
    }

    fn clone_state(&self) -> Box<dyn HashState> {
        Box::new(self.clone())
    }
}
