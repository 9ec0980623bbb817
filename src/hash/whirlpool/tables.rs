//! Whirlpool lookup tables
//!
//! All tables are computed at compile time from the algorithm's published
//! building blocks:
//!
//! - the 4-bit mini-boxes `E` and `R`, which assemble the 8-bit S-box
//! - the first row of the circulant diffusion matrix, `cir(1, 1, 4, 1, 8, 5, 2, 9)`
//! - the GF(2^8) reduction polynomial `x^8 + x^4 + x^3 + x^2 + 1`
//!
//! `CIRCULANT[k][x]` fuses the substitution, the byte permutation and the
//! diffusion layer for byte `x` sitting in row `k` of the state matrix.

/// Number of rounds of the W block cipher.
pub const ROUNDS: usize = 10;

const E: [u8; 16] = [
    0x1, 0xb, 0x9, 0xc, 0xd, 0x6, 0xf, 0x3, 0xe, 0x8, 0x7, 0x4, 0xa, 0x2, 0x5, 0x0,
];

const R: [u8; 16] = [
    0x7, 0xc, 0xb, 0xd, 0xe, 0x4, 0x9, 0xf, 0x6, 0x3, 0x8, 0xa, 0x2, 0x5, 0x1, 0x0,
];

const E_INV: [u8; 16] = invert(&E);

const DIFFUSION_ROW: [u8; 8] = [0x01, 0x01, 0x04, 0x01, 0x08, 0x05, 0x02, 0x09];

const REDUCTION_POLY: u16 = 0x11d;

pub const SBOX: [u8; 256] = build_sbox();

pub static CIRCULANT: [[u64; 256]; 8] = build_circulant();

/// Round constants, one per round. Only the first row is non-zero, so each
/// constant is a single word XORed into word 0 of the round key.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = build_round_constants();

const fn invert(mini_box: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        out[mini_box[i] as usize] = i as u8;
        i += 1;
    }
    out
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut u = 0;
    while u < 256 {
        let hi = E[u >> 4];
        let lo = E_INV[u & 0x0f];
        let r = R[(hi ^ lo) as usize];
        sbox[u] = (E[(hi ^ r) as usize] << 4) | E_INV[(lo ^ r) as usize];
        u += 1;
    }
    sbox
}

const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut product: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= REDUCTION_POLY;
        }
        b >>= 1;
    }
    product as u8
}

const fn build_circulant() -> [[u64; 256]; 8] {
    let mut tables = [[0u64; 256]; 8];
    let mut x = 0;
    while x < 256 {
        let s = SBOX[x];
        let mut row: u64 = 0;
        let mut j = 0;
        while j < 8 {
            row = (row << 8) | gf_mul(s, DIFFUSION_ROW[j]) as u64;
            j += 1;
        }
        let mut k = 0;
        while k < 8 {
            tables[k][x] = row.rotate_right(8 * k as u32);
            k += 1;
        }
        x += 1;
    }
    tables
}

const fn build_round_constants() -> [u64; ROUNDS] {
    let mut rc = [0u64; ROUNDS];
    let mut r = 0;
    while r < ROUNDS {
        let base = 8 * r;
        rc[r] = u64::from_be_bytes([
            SBOX[base],
            SBOX[base + 1],
            SBOX[base + 2],
            SBOX[base + 3],
            SBOX[base + 4],
            SBOX[base + 5],
            SBOX[base + 6],
            SBOX[base + 7],
        ]);
        r += 1;
    }
    rc
}
