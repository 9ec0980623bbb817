/// Errors reported at the hashing API boundary.
///
/// Every variant is detected before the target state is touched, so a failed
/// call can simply be retried with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The argument is not a byte sequence
    InvalidInputType {
        operation: &'static str,
        reason: &'static str,
    },
    /// The argument is a buffer whose shape cannot be read as flat bytes
    BufferConstraintViolation {
        operation: &'static str,
        reason: String,
    },
    /// The 256-bit message length counter would wrap
    LengthOverflow,
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::InvalidInputType { operation, reason } => {
                write!(f, "{}(): {}", operation, reason)
            }
            HashError::BufferConstraintViolation { operation, reason } => {
                write!(f, "{}(): {}", operation, reason)
            }
            HashError::LengthOverflow => {
                write!(f, "message length exceeds 2^256 bits")
            }
        }
    }
}

impl std::error::Error for HashError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_operation() {
        let err = HashError::InvalidInputType {
            operation: "update",
            reason: "Unicode-objects must be encoded before hashing",
        };
        assert_eq!(
            err.to_string(),
            "update(): Unicode-objects must be encoded before hashing"
        );

        let err = HashError::BufferConstraintViolation {
            operation: "new",
            reason: "Buffer must be single dimension".into(),
        };
        assert_eq!(err.to_string(), "new(): Buffer must be single dimension");
    }

    #[test]
    fn test_length_overflow_message() {
        assert_eq!(
            HashError::LengthOverflow.to_string(),
            "message length exceeds 2^256 bits"
        );
    }
}
