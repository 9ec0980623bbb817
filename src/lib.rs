//! Whirlpool message digest.
//!
//! The [`hash`] module holds the engine: the 512-bit compression function,
//! the streaming [`hash::whirlpool::Whirlpool`] context and the hex formatter.
//! [`bindings`] layers a hashlib-style object on top of it for hosts that pass
//! dynamically typed values.

pub mod bindings;
pub mod hash;

pub use hash::error::HashError;
pub use hash::whirlpool::{ALGORITHM_NAME, BLOCK_SIZE, DIGEST_SIZE, Whirlpool};
