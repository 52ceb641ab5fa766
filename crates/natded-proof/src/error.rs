//! Error types for proof construction.
//!
//! Rule failures are never returned to the caller of a rule; they latch the
//! proof into [`ProofStatus::Stopped`](crate::ProofStatus) with the
//! [`ErrorCode`] of the [`ProofError`] that caused it.

use std::fmt;

use natded_ir::{Formula, IrError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a failure condition, kept in the proof status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // State
    NoGoalDeclared,
    NoLogicSelected,
    UnknownLogic,
    LogicAfterProofStarted,
    PremiseAfterProofStarted,
    ProofAlreadyTerminated,
    RuleNotPermitted,
    ProofNotComplete,
    // Reference
    NoSuchLine,
    NoSuchSubproof,
    LineOutOfScope,
    SubproofNotClosed,
    CannotCloseRootSubproof,
    NoOpenSubproof,
    AlreadyAvailable,
    NotOrdinarySubproof,
    NotStrictSubproof,
    // Shape
    NotConjunction,
    NotDisjunction,
    NotImplication,
    NotIff,
    NotNegation,
    NotNecessary,
    NotPossibly,
    NotFalsehood,
    // Relational
    NotContradiction,
    ConsequentsDiffer,
    AntecedentConsequentMismatch,
    // Schema
    UnknownSchemaName,
    SchemaArityMismatch,
    PremiseSchemaMismatch,
    // Input
    NotAFormula,
    MalformedRecord,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProofError {
    #[error("No goal has been declared")]
    NoGoalDeclared,
    #[error("No logic has been selected")]
    NoLogicSelected,
    #[error("Logic '{0}' is not defined")]
    UnknownLogic(String),
    #[error("The logic cannot be changed once the proof has started")]
    LogicAfterProofStarted,
    #[error("Premises must precede every other line of the proof")]
    PremiseAfterProofStarted,
    #[error("The proof has already terminated")]
    ProofAlreadyTerminated,
    #[error("Rule '{rule}' is not permitted in logic '{logic}'")]
    RuleNotPermitted { rule: String, logic: String },
    #[error("The proof is not complete")]
    ProofNotComplete,

    #[error("Line {0} does not exist")]
    NoSuchLine(usize),
    #[error("Subproof {0} does not exist")]
    NoSuchSubproof(usize),
    #[error("Line {line} at level {line_level} is not accessible from level {current_level}")]
    LineOutOfScope {
        line: usize,
        line_level: usize,
        current_level: usize,
    },
    #[error("Subproof {0} is still open")]
    SubproofNotClosed(usize),
    #[error("The root of the proof cannot be closed as a subproof")]
    CannotCloseRootSubproof,
    #[error("Subproof {0} is not the open innermost subproof")]
    NoOpenSubproof(usize),
    #[error("Line {line} is already available as line {existing}")]
    AlreadyAvailable { line: usize, existing: usize },
    #[error("Subproof {0} is a strict subproof")]
    NotOrdinarySubproof(usize),
    #[error("Subproof {0} is not a strict subproof of the required form")]
    NotStrictSubproof(usize),

    #[error("Line {line} is not a conjunction: {found}")]
    NotConjunction { line: usize, found: Formula },
    #[error("Line {line} is not a disjunction: {found}")]
    NotDisjunction { line: usize, found: Formula },
    #[error("Line {line} is not an implication: {found}")]
    NotImplication { line: usize, found: Formula },
    #[error("Line {line} is not a biconditional: {found}")]
    NotIff { line: usize, found: Formula },
    #[error("{found} is not a negation of the required form")]
    NotNegation { found: Formula },
    #[error("{found} is not necessary")]
    NotNecessary { found: Formula },
    #[error("Line {line} is not a possibility: {found}")]
    NotPossibly { line: usize, found: Formula },
    #[error("Line {line} is not a contradiction: {found}")]
    NotFalsehood { line: usize, found: Formula },

    #[error("Lines {first} and {second} do not contradict each other")]
    NotContradiction { first: usize, second: usize },
    #[error("Consequents differ: {left} and {right}")]
    ConsequentsDiffer { left: Formula, right: Formula },
    #[error("Expected {expected}, found {found}")]
    AntecedentConsequentMismatch { expected: Formula, found: Formula },

    #[error("No {kind} named '{name}' in logic '{logic}'")]
    UnknownSchemaName {
        kind: String,
        name: String,
        logic: String,
    },
    #[error("Schema needs {expected} argument(s), got {actual}")]
    SchemaArityMismatch { expected: usize, actual: usize },
    #[error("Premise {index} of the schema does not match: expected {expected}, found {found}")]
    PremiseSchemaMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Not a formula: {0}")]
    NotAFormula(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl ProofError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProofError::NoGoalDeclared => ErrorCode::NoGoalDeclared,
            ProofError::NoLogicSelected => ErrorCode::NoLogicSelected,
            ProofError::UnknownLogic(_) => ErrorCode::UnknownLogic,
            ProofError::LogicAfterProofStarted => ErrorCode::LogicAfterProofStarted,
            ProofError::PremiseAfterProofStarted => ErrorCode::PremiseAfterProofStarted,
            ProofError::ProofAlreadyTerminated => ErrorCode::ProofAlreadyTerminated,
            ProofError::RuleNotPermitted { .. } => ErrorCode::RuleNotPermitted,
            ProofError::ProofNotComplete => ErrorCode::ProofNotComplete,
            ProofError::NoSuchLine(_) => ErrorCode::NoSuchLine,
            ProofError::NoSuchSubproof(_) => ErrorCode::NoSuchSubproof,
            ProofError::LineOutOfScope { .. } => ErrorCode::LineOutOfScope,
            ProofError::SubproofNotClosed(_) => ErrorCode::SubproofNotClosed,
            ProofError::CannotCloseRootSubproof => ErrorCode::CannotCloseRootSubproof,
            ProofError::NoOpenSubproof(_) => ErrorCode::NoOpenSubproof,
            ProofError::AlreadyAvailable { .. } => ErrorCode::AlreadyAvailable,
            ProofError::NotOrdinarySubproof(_) => ErrorCode::NotOrdinarySubproof,
            ProofError::NotStrictSubproof(_) => ErrorCode::NotStrictSubproof,
            ProofError::NotConjunction { .. } => ErrorCode::NotConjunction,
            ProofError::NotDisjunction { .. } => ErrorCode::NotDisjunction,
            ProofError::NotImplication { .. } => ErrorCode::NotImplication,
            ProofError::NotIff { .. } => ErrorCode::NotIff,
            ProofError::NotNegation { .. } => ErrorCode::NotNegation,
            ProofError::NotNecessary { .. } => ErrorCode::NotNecessary,
            ProofError::NotPossibly { .. } => ErrorCode::NotPossibly,
            ProofError::NotFalsehood { .. } => ErrorCode::NotFalsehood,
            ProofError::NotContradiction { .. } => ErrorCode::NotContradiction,
            ProofError::ConsequentsDiffer { .. } => ErrorCode::ConsequentsDiffer,
            ProofError::AntecedentConsequentMismatch { .. } => {
                ErrorCode::AntecedentConsequentMismatch
            }
            ProofError::UnknownSchemaName { .. } => ErrorCode::UnknownSchemaName,
            ProofError::SchemaArityMismatch { .. } => ErrorCode::SchemaArityMismatch,
            ProofError::PremiseSchemaMismatch { .. } => ErrorCode::PremiseSchemaMismatch,
            ProofError::NotAFormula(_) => ErrorCode::NotAFormula,
            ProofError::MalformedRecord(_) => ErrorCode::MalformedRecord,
        }
    }
}

impl From<IrError> for ProofError {
    fn from(err: IrError) -> Self {
        match err {
            IrError::SchemaArityMismatch { expected, actual } => {
                ProofError::SchemaArityMismatch { expected, actual }
            }
            other @ IrError::NotAFormula { .. } => ProofError::NotAFormula(other.to_string()),
        }
    }
}

pub type ProofResult<T> = Result<T, ProofError>;
