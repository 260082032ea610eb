use std::error::Error as StdError;
use std::fmt;

/// Failures surfaced by map construction, table growth and the experiment
/// harness.
///
/// All failures are deterministic, synchronous outcomes of the call that
/// produced them; an operation that fails applies no mutation at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied parameter was outside the range the operation
    /// accepts.
    InvalidArgument {
        /// Description of the rejected parameter.
        reason: String,
    },
    /// A requested or grown table length would exceed the hard size ceiling.
    CapacityExceeded {
        /// The table length the operation needed.
        requested: usize,
        /// The ceiling the length ran into.
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::CapacityExceeded { requested, limit } => {
                write!(f, "table length {requested} exceeds the maximum of {limit}")
            }
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let invalid = Error::InvalidArgument { reason: "boom".to_string() };
        assert_eq!(invalid.to_string(), "invalid argument: boom");

        let capacity = Error::CapacityExceeded { requested: 20_021, limit: 20_000 };
        assert_eq!(capacity.to_string(), "table length 20021 exceeds the maximum of 20000");
    }
}
