//! Hashing engine
//!
//! # Architecture
//!
//! - **Trait-Based**: `HashAlgorithm` describes an algorithm, `HashState` a
//!   running computation, so callers can hold a `Box<dyn HashState>`
//! - **Non-Destructive Finalize**: reading a digest never consumes the state
//! - **No Panics**: fallible entry points return `Result`
//!
//! # References
//!
//! - Whirlpool: P. S. L. M. Barreto, V. Rijmen, "The WHIRLPOOL Hashing
//!   Function", revised 2003 (ISO/IEC 10118-3)

pub mod error;
pub mod format;
pub mod whirlpool;

use error::HashError;

/// Unified trait for hash algorithms
pub trait HashAlgorithm: Send + Sync {
    /// Algorithm name as reported to callers
    fn name(&self) -> &'static str;

    /// Output size in bytes
    fn output_size(&self) -> usize;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Create a new hasher instance
    fn new_hasher(&self) -> Box<dyn HashState>;

    /// One-shot hash computation
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.new_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

/// State for incremental hashing
pub trait HashState: Send + std::fmt::Debug {
    /// Update hash state with data
    fn update(&mut self, data: &[u8]);

    /// Like `update`, but reports conditions the plain form only documents.
    ///
    /// On error the state is left exactly as it was.
    fn try_update(&mut self, data: &[u8]) -> Result<(), HashError> {
        self.update(data);
        Ok(())
    }

    /// Digest of everything absorbed so far. The state stays usable.
    fn finalize(&self) -> Vec<u8>;

    /// Digest as lowercase hex
    fn hexdigest(&self) -> String {
        format::to_hex(&self.finalize())
    }

    /// Clone the current state
    fn clone_state(&self) -> Box<dyn HashState>;
}
