//! natded - interactive natural deduction
//!
//! This is the top-level umbrella crate that re-exports the natded components.
//!
//! # Architecture
//!
//! - **Formula layer**: `ir` (formulas, parsing, schemas, pattern encoding)
//! - **Proof layer**: `proof` (ledger, subproofs, rules, logics, records)

pub use natded_ir as ir;
pub use natded_proof as proof;

pub use natded_ir::{parse_formula, Formula};
pub use natded_proof::{ErrorCode, Proof, ProofError, ProofStatus, Side, StepOutcome};
