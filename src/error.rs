use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScanErrorKind {
    /// A literal was required but the input held something else.
    #[error("tried to consume '{expected}' but input started with '{found}' instead")]
    UnexpectedLiteral { expected: String, found: String },
    /// Fewer characters remained than an operation needed.
    #[error("tried to consume {wanted} characters but only {available} remain")]
    UnexpectedEnd { wanted: usize, available: usize },
    /// A number was required but no digit of the given radix followed.
    #[error("expected base-{radix} digits")]
    MissingDigits { radix: u32 },
    /// The digits were read but do not fit the target type.
    #[error("'{token}' does not fit in {target}")]
    OutOfRange { token: String, target: &'static str },
    /// A value was parsed from a whole string but left input behind.
    #[error("unconsumed input '{0}'")]
    TrailingInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind} at position {position}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Abort with this error's diagnostic. Used by the non-`try` operations,
    /// whose callers guarantee the input is well formed.
    #[track_caller]
    pub(crate) fn fatal(self) -> ! {
        panic!("{}", self)
    }
}
