//! Inference rules, one `impl Proof` block per family.
//!
//! Every rule validates against the current state inside a closure passed
//! to the engine and only describes the line to append; the engine owns
//! the mutation.

mod modal;
mod propositional;
mod schema;
mod subproofs;

use serde::{Deserialize, Serialize};

/// Which operand of a binary connective a rule works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}
