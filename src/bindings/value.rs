//! Dynamically typed arguments handed over by a host language.

use crate::hash::error::HashError;

/// A buffer exported by the host together with the shape it claims.
///
/// An empty `shape` is a scalar view over the whole buffer; a one-entry shape
/// is a flat sequence. Anything with more dimensions cannot be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView<'a> {
    data: &'a [u8],
    shape: Vec<usize>,
}

impl<'a> BufferView<'a> {
    /// Flat, one-dimensional view of `data`.
    pub fn contiguous(data: &'a [u8]) -> Self {
        Self {
            data,
            shape: vec![data.len()],
        }
    }

    pub fn with_shape(data: &'a [u8], shape: Vec<usize>) -> Self {
        Self { data, shape }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Argument value as seen at the binding boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Bytes(&'a [u8]),
    /// Text that has not been encoded to bytes. Encoding is the caller's job.
    Text(&'a str),
    Buffer(BufferView<'a>),
    Int(i64),
    None,
}

impl<'a> Value<'a> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "str",
            Value::Buffer(_) => "buffer",
            Value::Int(_) => "int",
            Value::None => "NoneType",
        }
    }

    /// Borrow the value as flat bytes, or say why it cannot be hashed.
    pub fn as_hash_input(&self, operation: &'static str) -> Result<&'a [u8], HashError> {
        match self {
            Value::Bytes(data) => Ok(*data),
            Value::Text(_) => Err(HashError::InvalidInputType {
                operation,
                reason: "Unicode-objects must be encoded before hashing",
            }),
            Value::Buffer(view) => {
                if view.ndim() > 1 {
                    return Err(HashError::BufferConstraintViolation {
                        operation,
                        reason: "Buffer must be single dimension".into(),
                    });
                }
                if let [len] = view.shape() {
                    if *len != view.data().len() {
                        return Err(HashError::BufferConstraintViolation {
                            operation,
                            reason: format!(
                                "Buffer shape ({},) does not match its length {}",
                                len,
                                view.data().len()
                            ),
                        });
                    }
                }
                Ok(view.data())
            }
            Value::Int(_) | Value::None => Err(HashError::InvalidInputType {
                operation,
                reason: "object supporting the buffer API required",
            }),
        }
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(data: &'a [u8]) -> Self {
        Value::Bytes(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Value::Bytes(data)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(text)
    }
}
