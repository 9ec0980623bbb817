//! Hashlib-style object for host-language bindings
//!
//! Hosts hand in loosely typed [`Value`]s. Everything is validated here,
//! before the underlying state is touched, so a rejected call leaves the
//! object exactly as it was.
//!
//! - `HashObject::new([arg])` - new object, absorbing `arg` when given
//! - `update(arg)` - repeated calls equal one call on the concatenation
//! - `digest()` / `hexdigest()` - current digest, object stays usable
//! - `copy()` - independent clone
//! - `digest_size` / `block_size` / `name` - read-only attributes

pub mod value;

pub use crate::hash::whirlpool::{BLOCK_SIZE, DIGEST_SIZE};
pub use value::{BufferView, Value};

use crate::hash::error::HashError;
use crate::hash::whirlpool::WhirlpoolAlgorithm;
use crate::hash::{HashAlgorithm, HashState};

static ALGORITHM: WhirlpoolAlgorithm = WhirlpoolAlgorithm;

/// A running Whirlpool computation exposed to a host language.
#[derive(Debug)]
pub struct HashObject {
    state: Box<dyn HashState>,
}

impl HashObject {
    pub fn new(arg: Option<&Value<'_>>) -> Result<Self, HashError> {
        let mut state = ALGORITHM.new_hasher();
        if let Some(arg) = arg {
            let data = checked_input(arg, "new")?;
            state.try_update(data)?;
        }
        Ok(Self { state })
    }

    pub fn update(&mut self, arg: &Value<'_>) -> Result<(), HashError> {
        let data = checked_input(arg, "update")?;
        self.state.try_update(data)
    }

    /// Binary digest of the data passed so far. May contain any byte value.
    pub fn digest(&self) -> Vec<u8> {
        self.state.finalize()
    }

    /// Like `digest`, as a string of lowercase hexadecimal digits.
    pub fn hexdigest(&self) -> String {
        self.state.hexdigest()
    }

    pub fn copy(&self) -> Self {
        Self {
            state: self.state.clone_state(),
        }
    }

    pub fn digest_size(&self) -> usize {
        ALGORITHM.output_size()
    }

    pub fn block_size(&self) -> usize {
        ALGORITHM.block_size()
    }

    pub fn name(&self) -> &'static str {
        ALGORITHM.name()
    }
}

/// One-shot digest of `arg`.
#[deprecated(note = "use `HashObject::new` and `digest` or `hexdigest`")]
pub fn hash(arg: &Value<'_>) -> Result<Vec<u8>, HashError> {
    Ok(HashObject::new(Some(arg))?.digest())
}

fn checked_input<'a>(arg: &Value<'a>, operation: &'static str) -> Result<&'a [u8], HashError> {
    arg.as_hash_input(operation).inspect_err(|err| {
        tracing::debug!(
            operation,
            arg_type = arg.type_name(),
            error = %err,
            "rejected hash input"
        );
    })
}
