use std::fmt;

/// Result type for dumptree-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Faults that can occur while introspecting a value graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shared cell was reached again through one of its own descendants
    CycleDetected,
    /// A shared cell was mutably borrowed while being inspected
    BorrowFailed,
    /// Reading a member of an object failed
    MemberRead {
        member: String,
        error_type: String,
        message: String,
    },
}

impl Error {
    /// Short machine-readable name, used when the error is surfaced inline
    /// in rendered output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::CycleDetected => "CycleDetected",
            Error::BorrowFailed => "BorrowFailed",
            Error::MemberRead { .. } => "MemberRead",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CycleDetected => write!(f, "value graph contains a reference cycle"),
            Error::BorrowFailed => write!(f, "value is mutably borrowed during inspection"),
            Error::MemberRead {
                member,
                error_type,
                message,
            } => write!(f, "reading member '{}' failed: {}: {}", member, error_type, message),
        }
    }
}

impl std::error::Error for Error {}
