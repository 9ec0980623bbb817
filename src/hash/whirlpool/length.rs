/// Total number of message bits absorbed, as a 256-bit unsigned counter.
///
/// Limbs are stored most significant first so the counter serializes
/// directly into the big-endian length field of the final block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitLength([u64; 4]);

impl BitLength {
    pub const ZERO: BitLength = BitLength([0; 4]);
    pub const MAX: BitLength = BitLength([u64::MAX; 4]);

    /// Counter after absorbing `bytes` more bytes, or `None` if it would wrap.
    pub fn checked_add_bytes(&self, bytes: usize) -> Option<BitLength> {
        match self.overflowing_add_bits(bytes as u128 * 8) {
            (next, false) => Some(next),
            (_, true) => None,
        }
    }

    /// Advance by `bytes` bytes.
    ///
    /// Whirlpool is defined for messages shorter than 2^256 bits. Reaching
    /// that bound is physically out of reach, so release builds wrap instead
    /// of checking; `checked_add_bytes` is there for callers that want the
    /// check anyway.
    pub fn add_bytes(&mut self, bytes: usize) {
        let (next, overflowed) = self.overflowing_add_bits(bytes as u128 * 8);
        debug_assert!(!overflowed, "Whirlpool message length counter wrapped");
        *self = next;
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    fn overflowing_add_bits(&self, bits: u128) -> (BitLength, bool) {
        let mut limbs = self.0;
        let mut carry = bits;
        for limb in limbs.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let sum = *limb as u128 + (carry & u64::MAX as u128);
            *limb = sum as u64;
            carry = (carry >> 64) + (sum >> 64);
        }
        (BitLength(limbs), carry != 0)
    }
}

impl From<u128> for BitLength {
    fn from(bits: u128) -> Self {
        BitLength([0, 0, (bits >> 64) as u64, bits as u64])
    }
}
