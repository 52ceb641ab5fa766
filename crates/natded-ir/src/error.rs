//! Error types for the IR.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("Not a formula: '{input}' ({reason})")]
    NotAFormula { input: String, reason: String },
    #[error("Schema arity mismatch: pattern needs {expected} argument(s), got {actual}")]
    SchemaArityMismatch { expected: usize, actual: usize },
}

impl IrError {
    pub(crate) fn not_a_formula(input: impl Into<String>, reason: impl Into<String>) -> Self {
        IrError::NotAFormula {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
