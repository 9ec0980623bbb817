//! The Whirlpool compression function.
//!
//! The dedicated 512-bit block cipher W is keyed by the chaining value and
//! run over the message block; the result is folded back with a
//! Miyaguchi-Preneel feed-forward: `H' = W_H(m) ^ H ^ m`.

use super::tables::{CIRCULANT, ROUND_CONSTANTS};

pub const BLOCK_BYTES: usize = 64;

/// One message block.
pub type Block = [u8; BLOCK_BYTES];

/// The 512-bit chaining value, eight big-endian rows of the state matrix.
pub type ChainValue = [u64; 8];

/// Compress one block into `state`, returning the next chaining value.
pub fn compress(state: &ChainValue, block: &Block) -> ChainValue {
    let mut next = *state;
    compress_block(&mut next, block);
    next
}

/// In-place form used by the streaming context. `block` must be exactly
/// `BLOCK_BYTES` long.
pub(crate) fn compress_block(state: &mut ChainValue, block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_BYTES);

    let message = load_words(block);
    let mut key = *state;
    let mut cipher = xor(&message, &key);

    for rc in ROUND_CONSTANTS {
        key = round(&key);
        key[0] ^= rc;
        cipher = xor(&round(&cipher), &key);
    }

    for ((h, c), m) in state.iter_mut().zip(cipher).zip(message) {
        *h ^= c ^ m;
    }
}

/// One application of the round function (substitution, cyclic permutation
/// and diffusion) through the fused lookup tables.
#[inline(always)]
fn round(words: &ChainValue) -> ChainValue {
    let mut out = [0u64; 8];
    for (i, o) in out.iter_mut().enumerate() {
        let mut acc = 0;
        for (k, table) in CIRCULANT.iter().enumerate() {
            let word = words[(i + 8 - k) % 8];
            acc ^= table[(word >> (56 - 8 * k)) as u8 as usize];
        }
        *o = acc;
    }
    out
}

#[inline(always)]
fn xor(a: &ChainValue, b: &ChainValue) -> ChainValue {
    let mut out = *a;
    for (o, w) in out.iter_mut().zip(b) {
        *o ^= w;
    }
    out
}

fn load_words(block: &[u8]) -> ChainValue {
    let mut words = [0u64; 8];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }
    words
}
