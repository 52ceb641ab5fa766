//! # natded IR
//!
//! Term model for the natded proof engine: propositional formulas with the
//! modal operators □ and ◇, their text and LaTeX renderings, a parser for
//! the text form, and the schema patterns used to store axioms, definitions
//! and lemmas independently of the propositions they mention.
//!
//! ## Quick Start
//!
//! ```rust
//! use natded_ir::{decode, encode, Formula};
//!
//! let f: Formula = "A -> (B -> A)".parse().unwrap();
//! assert_eq!(f, Formula::imply(Formula::prop("A"), Formula::imply(Formula::prop("B"), Formula::prop("A"))));
//!
//! let (pattern, args) = encode(&f);
//! assert_eq!(pattern.to_string(), "({0} → ({1} → {0}))");
//! assert_eq!(decode(&pattern, &args).unwrap(), f);
//! ```
//!
//! ## Architecture
//!
//! - **formula**: the [`Formula`] tree and its builders
//! - **schema**: [`Schema`] patterns, [`encode`], [`encode_all`], [`decode`]
//! - **parser**: text → [`Formula`] / [`Schema`]
//! - **display**: text and LaTeX rendering
//! - **error**: [`IrError`]

mod display;
mod error;
mod formula;
mod parser;
mod schema;


pub use error::IrError;
pub use formula::Formula;
pub use parser::{
    check_propositions, parse_formula, parse_rule_pattern, parse_schema, MAX_PLACEHOLDER,
};
pub use schema::{decode, encode, encode_all, Schema};
