//! Logics and the named schemas (axioms, definitions, lemmas, substitutions)
//! that proofs look up by name.
//!
//! A [`Library`] is built once and handed to every [`Proof`](crate::Proof)
//! behind an `Arc`; proofs never mutate it.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use natded_ir::{Formula, Schema};
use serde::{Deserialize, Serialize};

use crate::error::ProofError;
use crate::ledger::Rule;
use crate::logic::{builtin_logics, LogicDefinition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaKind {
    Axiom,
    Definition,
    Lemma,
    Substitution,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Axiom,
        SchemaKind::Definition,
        SchemaKind::Lemma,
        SchemaKind::Substitution,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Axiom => "axiom",
            SchemaKind::Definition => "definition",
            SchemaKind::Lemma => "lemma",
            SchemaKind::Substitution => "substitution",
        }
    }

    /// The rule tag written on lines justified by a schema of this kind.
    pub fn rule(&self) -> Rule {
        match self {
            SchemaKind::Axiom => Rule::Axiom,
            SchemaKind::Definition => Rule::Definition,
            SchemaKind::Lemma => Rule::Lemma,
            SchemaKind::Substitution => Rule::Substitution,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaKind {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SchemaKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProofError::MalformedRecord(format!("unknown schema kind '{}'", s)))
    }
}

/// A stored inference pattern `premises ⊢ conclusion`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSchema {
    pub logic: String,
    pub kind: SchemaKind,
    pub name: String,
    pub premises: Vec<Schema>,
    pub conclusion: Schema,
    pub display_name: String,
    pub description: String,
}

impl NamedSchema {
    pub fn new(
        logic: impl Into<String>,
        kind: SchemaKind,
        name: impl Into<String>,
        premises: Vec<Schema>,
        conclusion: Schema,
    ) -> Self {
        let name = name.into();
        NamedSchema {
            logic: logic.into(),
            kind,
            display_name: name.clone(),
            name,
            premises,
            conclusion,
            description: String::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Number of arguments needed to instantiate every premise and the
    /// conclusion.
    pub fn arity(&self) -> usize {
        self.premises
            .iter()
            .chain(std::iter::once(&self.conclusion))
            .map(Schema::arity)
            .max()
            .unwrap_or(0)
    }

    pub fn pattern_text(&self) -> String {
        pattern_text(&self.premises, &self.conclusion)
    }
}

/// `p1, p2 ⊢ c`, or just `c` when there are no premises.
pub fn pattern_text(premises: &[Schema], conclusion: &Schema) -> String {
    if premises.is_empty() {
        return conclusion.to_string();
    }
    let premises = premises
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ⊢ {}", premises, conclusion)
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaKey {
    pub logic: String,
    pub kind: SchemaKind,
    pub name: String,
}

impl SchemaKey {
    pub fn new(logic: impl Into<String>, kind: SchemaKind, name: impl Into<String>) -> Self {
        SchemaKey {
            logic: logic.into(),
            kind,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Library {
    logics: IndexMap<String, LogicDefinition>,
    schemas: IndexMap<SchemaKey, NamedSchema>,
}

impl Library {
    pub fn new() -> Self {
        Library::default()
    }

    /// The built-in logics with their standard schemas.
    pub fn builtin() -> Self {
        let mut library = Library::new();
        for logic in builtin_logics() {
            library.register_logic(logic.clone());
        }
        for schema in builtin_schemas() {
            library.register_schema(schema);
        }
        library
    }

    /// Process-wide shared copy of [`Library::builtin`].
    pub fn shared_builtin() -> Arc<Library> {
        static BUILTIN: OnceLock<Arc<Library>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Library::builtin())))
    }

    /// Add or replace a logic, keyed by its id.
    pub fn register_logic(&mut self, logic: LogicDefinition) -> Option<LogicDefinition> {
        self.logics.insert(logic.id.clone(), logic)
    }

    /// Add or replace a schema, keyed by `(logic, kind, name)`.
    pub fn register_schema(&mut self, schema: NamedSchema) -> Option<NamedSchema> {
        let key = SchemaKey::new(schema.logic.clone(), schema.kind, schema.name.clone());
        self.schemas.insert(key, schema)
    }

    pub fn logic(&self, id: &str) -> Option<&LogicDefinition> {
        self.logics.get(id)
    }

    pub fn logics(&self) -> impl Iterator<Item = &LogicDefinition> {
        self.logics.values()
    }

    pub fn schema(&self, logic: &str, kind: SchemaKind, name: &str) -> Option<&NamedSchema> {
        self.schemas.get(&SchemaKey::new(logic, kind, name))
    }

    /// Every schema, in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &NamedSchema> {
        self.schemas.values()
    }

    /// Every schema available to `logic`, in registration order.
    pub fn schemas_for<'a>(&'a self, logic: &'a str) -> impl Iterator<Item = &'a NamedSchema> {
        self.schemas.values().filter(move |s| s.logic == logic)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn p(i: usize) -> Schema {
    Schema::placeholder(i)
}

fn builtin_schemas() -> Vec<NamedSchema> {
    let mut schemas = Vec::new();
    let all = ["C", "I", "K", "T"];
    let classical = ["C", "K", "T"];
    let modal = ["K", "T"];

    let iff = Schema::iff(p(0), p(1));
    let both_ways = Schema::and(Schema::imply(p(0), p(1)), Schema::imply(p(1), p(0)));
    for logic in all {
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Definition,
                "Biconditional",
                vec![iff.clone()],
                both_ways.clone(),
            )
            .with_description("A biconditional is a pair of implications"),
        );
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Definition,
                "Biconditional Converse",
                vec![both_ways.clone()],
                iff.clone(),
            )
            .with_description("A pair of implications is a biconditional"),
        );
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Substitution,
                "DeMorgan Or",
                vec![Schema::negate(Schema::or(p(0), p(1)))],
                Schema::and(Schema::negate(p(0)), Schema::negate(p(1))),
            )
            .with_display_name("De Morgan (disjunction)"),
        );
    }

    for logic in classical {
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Axiom,
                "LEM",
                Vec::new(),
                Schema::or(p(0), Schema::negate(p(0))),
            )
            .with_display_name("Law of Excluded Middle"),
        );
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Substitution,
                "DeMorgan And",
                vec![Schema::negate(Schema::and(p(0), p(1)))],
                Schema::or(Schema::negate(p(0)), Schema::negate(p(1))),
            )
            .with_display_name("De Morgan (conjunction)"),
        );
    }

    for logic in modal {
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Axiom,
                "K",
                Vec::new(),
                Schema::imply(
                    Schema::necessary(Schema::imply(p(0), p(1))),
                    Schema::imply(Schema::necessary(p(0)), Schema::necessary(p(1))),
                ),
            )
            .with_display_name("Distribution Axiom"),
        );
        schemas.push(
            NamedSchema::new(
                logic,
                SchemaKind::Definition,
                "Possibility",
                vec![Schema::possibly(p(0))],
                Schema::negate(Schema::necessary(Schema::negate(p(0)))),
            )
            .with_description("◇A abbreviates ¬□¬A"),
        );
    }

    schemas.push(
        NamedSchema::new(
            "T",
            SchemaKind::Axiom,
            "T",
            Vec::new(),
            Schema::imply(Schema::necessary(p(0)), p(0)),
        )
        .with_display_name("Reflexivity Axiom"),
    );

    schemas
}

/// Instantiate every premise of `schema` with `args`.
pub(crate) fn instantiate_premises(
    schema: &NamedSchema,
    args: &[Formula],
) -> Result<Vec<Formula>, ProofError> {
    schema
        .premises
        .iter()
        .map(|premise| natded_ir::decode(premise, args).map_err(ProofError::from))
        .collect()
}
