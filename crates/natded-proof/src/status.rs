//! The single Open/Complete/Stopped state gating every mutation of a proof.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ProofError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofStatus {
    #[default]
    Open,
    /// Every declared goal has been derived at the outermost level.
    Complete,
    /// A rule failed its preconditions; the first failure is kept.
    Stopped { code: ErrorCode, message: String },
}

impl ProofStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, ProofStatus::Open)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ProofStatus::Complete)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, ProofStatus::Stopped { .. })
    }

    pub fn stop_code(&self) -> Option<ErrorCode> {
        match self {
            ProofStatus::Stopped { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for ProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofStatus::Open => write!(f, "open"),
            ProofStatus::Complete => write!(f, "complete"),
            ProofStatus::Stopped { code, message } => write!(f, "stopped ({}): {}", code, message),
        }
    }
}

/// Monotone latch over [`ProofStatus`]: once it leaves `Open` it never changes.
#[derive(Clone, Debug, Default)]
pub struct StatusLatch {
    status: ProofStatus,
}

impl StatusLatch {
    pub fn new() -> Self {
        StatusLatch::default()
    }

    pub fn can_proceed(&self) -> bool {
        self.status.is_open()
    }

    pub fn status(&self) -> &ProofStatus {
        &self.status
    }

    /// Latch `Stopped` with the error's code. Returns `false` when the latch
    /// had already left `Open`, in which case nothing changes.
    pub fn stop(&mut self, err: &ProofError) -> bool {
        if !self.can_proceed() {
            return false;
        }
        self.status = ProofStatus::Stopped {
            code: err.code(),
            message: err.to_string(),
        };
        true
    }

    /// Latch `Complete`. Same first-wins rule as [`StatusLatch::stop`].
    pub fn complete(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        self.status = ProofStatus::Complete;
        true
    }
}
