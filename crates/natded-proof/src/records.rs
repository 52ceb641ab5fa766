//! Flat records exchanged with storage.
//!
//! Storage only round-trips these; nothing here re-validates a proof.
//! References are stored as comma-joined text (`"1, 3"`), formulas in their
//! display form and schemas as `p1, p2 ⊢ c` patterns.

use std::str::FromStr;

use natded_ir::{parse_formula, parse_rule_pattern};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::Proof;
use crate::error::{ProofError, ProofResult};
use crate::ledger::{LineIndex, ProofLine, Rule, Statement};
use crate::library::{pattern_text, Library, NamedSchema, SchemaKind};
use crate::logic::LogicDefinition;
use crate::status::ProofStatus;

fn join_refs(refs: &[usize]) -> String {
    refs.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn split_refs(text: &str) -> ProofResult<Vec<usize>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| ProofError::MalformedRecord(format!("bad reference '{}'", part)))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub statement: String,
    pub level: usize,
    pub subproof_id: usize,
    pub rule: String,
    pub line_refs: String,
    pub subproof_refs: String,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl From<&ProofLine> for LineRecord {
    fn from(line: &ProofLine) -> Self {
        LineRecord {
            statement: line.statement.to_string(),
            level: line.level,
            subproof_id: line.subproof_id,
            rule: line.rule.name().to_string(),
            line_refs: join_refs(&line.line_refs),
            subproof_refs: join_refs(&line.subproof_refs),
            comment: line.comment.clone(),
            schema: line.schema.clone(),
        }
    }
}

impl TryFrom<&LineRecord> for ProofLine {
    type Error = ProofError;

    fn try_from(record: &LineRecord) -> ProofResult<Self> {
        let rule = Rule::from_str(&record.rule)?;
        let statement = if rule == Rule::Goal {
            Statement::GoalHeader(record.statement.clone())
        } else if record.statement.trim().is_empty() {
            Statement::Blank
        } else {
            Statement::Formula(parse_formula(&record.statement)?)
        };
        let mut line = ProofLine::new(statement, record.level, record.subproof_id, rule);
        line.line_refs = split_refs(&record.line_refs)?;
        line.subproof_refs = split_refs(&record.subproof_refs)?;
        line.comment = record.comment.clone();
        line.schema = record.schema.clone();
        Ok(line)
    }
}

/// Identity of a stored proof. `pattern` is the proof read as a rule,
/// `premises ⊢ goals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofHeader {
    pub name: String,
    pub pattern: String,
    pub display_name: String,
    pub description: String,
    pub logic: String,
}

impl Proof {
    pub fn header(&self) -> ProofHeader {
        let pattern = self
            .rule_patterns()
            .map(|(premises, conclusion)| pattern_text(&premises, &conclusion))
            .unwrap_or_default();
        ProofHeader {
            name: self.name.clone(),
            pattern,
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            logic: self.logic.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub logic: String,
    pub kind: String,
    pub name: String,
    pub pattern: String,
    pub display_name: String,
    pub description: String,
}

impl From<&NamedSchema> for SchemaRecord {
    fn from(schema: &NamedSchema) -> Self {
        SchemaRecord {
            logic: schema.logic.clone(),
            kind: schema.kind.name().to_string(),
            name: schema.name.clone(),
            pattern: schema.pattern_text(),
            display_name: schema.display_name.clone(),
            description: schema.description.clone(),
        }
    }
}

impl TryFrom<&SchemaRecord> for NamedSchema {
    type Error = ProofError;

    fn try_from(record: &SchemaRecord) -> ProofResult<Self> {
        let kind = SchemaKind::from_str(&record.kind)?;
        let (premises, conclusion) = parse_rule_pattern(&record.pattern)
            .map_err(|e| ProofError::MalformedRecord(e.to_string()))?;
        Ok(
            NamedSchema::new(record.logic.clone(), kind, record.name.clone(), premises, conclusion)
                .with_display_name(record.display_name.clone())
                .with_description(record.description.clone()),
        )
    }
}

/// A logic as stored: its permitted rule names, comma-joined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicRecord {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub rules: String,
}

impl From<&LogicDefinition> for LogicRecord {
    fn from(logic: &LogicDefinition) -> Self {
        LogicRecord {
            id: logic.id.clone(),
            display_name: logic.display_name.clone(),
            description: logic.description.clone(),
            rules: logic
                .rules
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl TryFrom<&LogicRecord> for LogicDefinition {
    type Error = ProofError;

    fn try_from(record: &LogicRecord) -> ProofResult<Self> {
        let rules = record
            .rules
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Rule::from_str)
            .collect::<ProofResult<Vec<_>>>()?;
        Ok(
            LogicDefinition::new(record.id.clone(), record.display_name.clone())
                .with_description(record.description.clone())
                .with_rules(rules),
        )
    }
}

/// Format version written into every stored document.
pub const FORMAT_VERSION: &str = "1.0.0";

/// A stored payload with the format version and the time it was written.
/// The payload's fields sit next to `version` in the JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: String,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Envelope {
            version: FORMAT_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            payload,
        }
    }

    /// Written by the same major format version.
    pub fn is_compatible(&self) -> bool {
        major(&self.version) == major(FORMAT_VERSION)
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Read a stored document. Other major versions are rejected.
    pub fn from_json(json: &str) -> ProofResult<Self> {
        let envelope: Envelope<T> =
            serde_json::from_str(json).map_err(|e| ProofError::MalformedRecord(e.to_string()))?;
        if !envelope.is_compatible() {
            return Err(ProofError::MalformedRecord(format!(
                "unsupported format version {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

fn major(version: &str) -> Option<&str> {
    version.split('.').next()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProofPayload {
    pub header: ProofHeader,
    pub status: ProofStatus,
    pub lines: Vec<LineRecord>,
}

/// A whole proof: header, status and every ledger line.
pub type ProofDocument = Envelope<ProofPayload>;

impl Envelope<ProofPayload> {
    pub fn from_proof(proof: &Proof) -> Self {
        Envelope::new(ProofPayload {
            header: proof.header(),
            status: proof.status().clone(),
            lines: proof.lines().map(LineRecord::from).collect(),
        })
    }

    /// Rebuild the ledger lines. Line 0 is the goal header.
    pub fn proof_lines(&self) -> ProofResult<Vec<ProofLine>> {
        self.payload.lines.iter().map(ProofLine::try_from).collect()
    }

    /// Ledger position of the first blank (stopped) line, if any.
    pub fn stopped_at(&self) -> Option<LineIndex> {
        self.payload
            .lines
            .iter()
            .position(|line| line.rule != Rule::Goal.name() && line.statement.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryPayload {
    pub logics: Vec<LogicRecord>,
    pub schemas: Vec<SchemaRecord>,
}

/// The logics and named schemas a [`Library`] holds.
pub type LibraryDocument = Envelope<LibraryPayload>;

impl Envelope<LibraryPayload> {
    pub fn from_library(library: &Library) -> Self {
        Envelope::new(LibraryPayload {
            logics: library.logics().map(LogicRecord::from).collect(),
            schemas: library.schemas().map(SchemaRecord::from).collect(),
        })
    }

    pub fn to_library(&self) -> ProofResult<Library> {
        let mut library = Library::new();
        for record in &self.payload.logics {
            library.register_logic(LogicDefinition::try_from(record)?);
        }
        for record in &self.payload.schemas {
            library.register_schema(NamedSchema::try_from(record)?);
        }
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn modus_ponens() -> Proof {
        let mut proof = Proof::with_builtins("mp").with_display_name("Modus Ponens");
        proof.set_logic("C");
        proof.goal("B");
        proof.premise("A");
        proof.premise("A -> B");
        proof.implication_elim(1, 2);
        proof
    }

    #[test]
    fn test_line_record_text() {
        let proof = modus_ponens();
        let record = LineRecord::from(proof.line(3).unwrap());
        assert_eq!(record.statement, "B");
        assert_eq!(record.rule, "Implication Elim");
        assert_eq!(record.line_refs, "1, 2");
        assert_eq!(record.subproof_refs, "");
        assert_eq!(record.comment, "COMPLETE");
    }

    #[test]
    fn test_line_records_restore_lines() {
        let proof = modus_ponens();
        for line in proof.lines() {
            let restored = ProofLine::try_from(&LineRecord::from(line)).unwrap();
            assert_eq!(&restored, line);
        }
    }

    #[test]
    fn test_unrestorable_names_never_reach_records() {
        use natded_ir::Formula;

        let mut proof = Proof::with_builtins("names");
        proof.set_logic("C");
        proof.goal("Z");
        proof.premise(Formula::imply(Formula::prop("rain'"), Formula::prop("Wet_2")));
        for line in proof.lines() {
            let restored = ProofLine::try_from(&LineRecord::from(line)).unwrap();
            assert_eq!(&restored, line);
        }

        for name in ["TRUE", "NOT", "or", "p q"] {
            let mut proof = Proof::with_builtins("names");
            proof.set_logic("C");
            proof.goal("Z");
            assert_eq!(
                proof.premise(Formula::prop(name)),
                crate::engine::StepOutcome::Stopped(ErrorCode::NotAFormula)
            );
            assert_eq!(
                proof.goal(Formula::prop(name)),
                crate::engine::StepOutcome::Ignored
            );
            for line in proof.lines() {
                assert!(ProofLine::try_from(&LineRecord::from(line)).is_ok());
            }
        }
    }

    #[test]
    fn test_oversized_placeholder_pattern() {
        let record = SchemaRecord {
            logic: "C".to_string(),
            kind: "axiom".to_string(),
            name: "huge".to_string(),
            pattern: "{18446744073709551615}".to_string(),
            display_name: "huge".to_string(),
            description: String::new(),
        };
        let err = NamedSchema::try_from(&record).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
    }

    #[test]
    fn test_malformed_refs() {
        let mut record = LineRecord::from(modus_ponens().line(3).unwrap());
        record.line_refs = "1, x".to_string();
        let err = ProofLine::try_from(&record).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
    }

    #[test]
    fn test_header_pattern() {
        let header = modus_ponens().header();
        assert_eq!(header.pattern, "{0}, ({0} → {1}) ⊢ {1}");
        assert_eq!(header.display_name, "Modus Ponens");
        assert_eq!(header.logic, "C");
    }

    #[test]
    fn test_schema_records_round_trip() {
        let library = Library::builtin();
        for logic in ["C", "K", "T"] {
            for schema in library.schemas_for(logic) {
                let record = SchemaRecord::from(schema);
                assert_eq!(&NamedSchema::try_from(&record).unwrap(), schema);
            }
        }
    }

    #[test]
    fn test_logic_records_round_trip() {
        let library = Library::builtin();
        for logic in library.logics() {
            let record = LogicRecord::from(logic);
            assert_eq!(&LogicDefinition::try_from(&record).unwrap(), logic);
        }
    }

    #[test]
    fn test_document_json() {
        let proof = modus_ponens();
        let document = ProofDocument::from_proof(&proof);
        let json = document.to_json_pretty().unwrap();
        let restored = ProofDocument::from_json(&json).unwrap();
        assert_eq!(restored, document);
        assert!(restored.payload.status.is_complete());
        assert_eq!(restored.proof_lines().unwrap().len(), 4);
        assert_eq!(restored.stopped_at(), None);
    }

    #[test]
    fn test_stopped_document() {
        let mut proof = Proof::with_builtins("stopped");
        proof.set_logic("C");
        proof.goal("C");
        proof.premise("A");
        proof.conjunction_elim(1, crate::rules::Side::Right);
        let document = ProofDocument::from_proof(&proof);
        assert_eq!(document.stopped_at(), Some(2));
        let lines = document.proof_lines().unwrap();
        assert!(lines[2].statement.is_blank());
    }

    #[test]
    fn test_document_fields_share_one_object() {
        let json = ProofDocument::from_proof(&modus_ponens()).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["header"]["logic"], "C");
        assert_eq!(value["lines"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_incompatible_version_rejected() {
        let mut document = ProofDocument::from_proof(&modus_ponens());
        document.version = "2.0.0".to_string();
        assert!(!document.is_compatible());
        let json = document.to_json_pretty().unwrap();
        let err = ProofDocument::from_json(&json).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
        assert_eq!(
            ProofDocument::from_json("{").unwrap_err().code(),
            ErrorCode::MalformedRecord
        );
    }

    #[test]
    fn test_library_document_restores_library() {
        let library = Library::builtin();
        let json = LibraryDocument::from_library(&library).to_json_pretty().unwrap();
        let restored = LibraryDocument::from_json(&json).unwrap().to_library().unwrap();
        assert_eq!(restored.len(), library.len());
        for logic in library.logics() {
            assert_eq!(restored.logic(&logic.id), Some(logic));
        }
        for schema in library.schemas() {
            assert_eq!(
                restored.schema(&schema.logic, schema.kind, &schema.name),
                Some(schema)
            );
        }
    }

}
