use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The single remote operation an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    ReadAll,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::ReadAll => "read all",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum InvokeError {
    /// The configured address could not be reached; no call was attempted.
    #[error("did not connect to {address}: {reason}")]
    Connection { address: String, reason: String },
    #[error("{operation} failed against {address}: {failure}")]
    Call {
        operation: Operation,
        address: String,
        failure: CallFailure,
    },
}

#[derive(Error, Debug)]
pub enum CallFailure {
    #[error("deadline of {}s exceeded", .0.as_secs_f64())]
    DeadlineExceeded(Duration),
    #[error("{}: {}", .0.code(), .0.message())]
    Status(tonic::Status),
}

impl InvokeError {
    pub fn is_connection(&self) -> bool {
        matches!(self, InvokeError::Connection { .. })
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(
            self,
            InvokeError::Call {
                failure: CallFailure::DeadlineExceeded(_),
                ..
            }
        )
    }
}
