//! # natded proof engine
//!
//! Interactive natural-deduction proofs in the Fitch style. A [`Proof`]
//! holds an append-only ledger of lines, a tree of nested subproofs and the
//! declared goals. Every inference rule is a method on [`Proof`] that
//! validates its references against the current state and either appends
//! the derived line or stops the proof, leaving a blank marker line and the
//! failure in [`Proof::status`].
//!
//! ## Quick Start
//!
//! ```rust
//! use natded_proof::{Proof, StepOutcome};
//!
//! let mut proof = Proof::with_builtins("modus-ponens");
//! proof.set_logic("C");
//! proof.goal("B");
//! proof.premise("A");
//! proof.premise("A -> B");
//! assert_eq!(proof.implication_elim(1, 2), StepOutcome::Appended(3));
//! assert!(proof.status().is_complete());
//! ```
//!
//! ## Architecture
//!
//! - **ledger**: [`ProofLine`]s and the [`Rule`] tags justifying them
//! - **subproof**: [`SubproofTree`], ordinary and strict blocks
//! - **goals**: [`GoalTracker`]
//! - **status**: [`ProofStatus`] behind a first-stop-wins latch
//! - **engine** / **rules**: [`Proof`] and its inference rules
//! - **logic** / **library**: [`LogicDefinition`]s and [`NamedSchema`]s
//! - **records**: flat records for storage
//! - **[`config`]**, **[`logging`]**: ambient setup

pub mod config;
mod engine;
mod error;
mod goals;
mod ledger;
mod library;
mod logic;
pub mod logging;
mod records;
mod rules;
mod status;
mod subproof;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{IntoFormula, Proof, StepOutcome};
pub use error::{ErrorCode, ProofError, ProofResult};
pub use goals::{GoalCheck, GoalTracker};
pub use ledger::{Ledger, LineIndex, ProofLine, Rule, Statement};
pub use library::{pattern_text, Library, NamedSchema, SchemaKey, SchemaKind};
pub use logic::{builtin_logics, LogicDefinition};
pub use records::{
    Envelope, LibraryDocument, LibraryPayload, LineRecord, LogicRecord, ProofDocument, ProofHeader,
    ProofPayload, SchemaRecord, FORMAT_VERSION,
};
pub use rules::Side;
pub use status::{ProofStatus, StatusLatch};
pub use subproof::{Subproof, SubproofId, SubproofKind, SubproofTree, ROOT_SUBPROOF};
