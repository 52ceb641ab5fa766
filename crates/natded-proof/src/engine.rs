//! The proof aggregate and the validate-then-apply cycle shared by every rule.
//!
//! Each public operation on [`Proof`] runs the same steps:
//!
//! 1. do nothing (and return [`StepOutcome::Ignored`]) unless the status is open
//! 2. check that a logic is selected, a goal declared and the rule permitted
//! 3. run the rule's validator, a pure function of the current state
//! 4. on failure, append a blank marker line and latch the proof as stopped
//! 5. on success, append the derived line and check it against the goals
//!
//! Failures never escape as `Err`; the outcome only reports what happened.

use std::sync::Arc;

use natded_ir::{encode_all, Formula, Schema};

use crate::config::EngineConfig;
use crate::error::{ErrorCode, ProofError, ProofResult};
use crate::goals::{GoalCheck, GoalTracker};
use crate::ledger::{Ledger, LineIndex, ProofLine, Rule, Statement};
use crate::library::{Library, NamedSchema, SchemaKind};
use crate::status::{ProofStatus, StatusLatch};
use crate::subproof::{Subproof, SubproofId, SubproofKind, SubproofTree, ROOT_SUBPROOF};

/// What a call on [`Proof`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Appended(LineIndex),
    /// A strict subproof was opened without appending a line.
    Opened(SubproofId),
    /// Proof metadata (logic, goals) changed; no line was appended.
    Updated,
    Stopped(ErrorCode),
    /// The proof had already terminated.
    Ignored,
}

impl StepOutcome {
    pub fn line(&self) -> Option<LineIndex> {
        match self {
            StepOutcome::Appended(index) => Some(*index),
            _ => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, StepOutcome::Stopped(_))
    }
}

/// Anything a rule accepts as a formula argument. Text is parsed, and a
/// parse failure stops the proof with `NotAFormula`. Built formulas must
/// use proposition names that survive a trip through their text form.
pub trait IntoFormula {
    fn into_formula(self) -> ProofResult<Formula>;
}

impl IntoFormula for Formula {
    fn into_formula(self) -> ProofResult<Formula> {
        natded_ir::check_propositions(&self)?;
        Ok(self)
    }
}

impl IntoFormula for &Formula {
    fn into_formula(self) -> ProofResult<Formula> {
        self.clone().into_formula()
    }
}

impl IntoFormula for &str {
    fn into_formula(self) -> ProofResult<Formula> {
        natded_ir::parse_formula(self).map_err(ProofError::from)
    }
}

impl IntoFormula for String {
    fn into_formula(self) -> ProofResult<Formula> {
        self.as_str().into_formula()
    }
}

/// Structural change that accompanies a derived line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    None,
    /// Open a subproof; the line becomes its first hypothesis.
    Open(SubproofKind),
    /// The line is another hypothesis of the current subproof.
    Hypothesis,
    /// Close the subproof, then append the line in its parent.
    Close(SubproofId),
}

/// A validated step, ready to be committed.
#[derive(Clone, Debug)]
pub(crate) struct Derivation {
    pub formula: Formula,
    pub line_refs: Vec<LineIndex>,
    pub subproof_refs: Vec<SubproofId>,
    pub schema: Option<String>,
    pub comment: String,
    pub effect: Effect,
}

impl Derivation {
    pub fn new(formula: Formula) -> Self {
        Derivation {
            formula,
            line_refs: Vec::new(),
            subproof_refs: Vec::new(),
            schema: None,
            comment: String::new(),
            effect: Effect::None,
        }
    }

    pub fn lines(mut self, refs: &[LineIndex]) -> Self {
        self.line_refs = refs.to_vec();
        self
    }

    pub fn subproof(mut self, id: SubproofId) -> Self {
        self.subproof_refs.push(id);
        self
    }

    pub fn schema(mut self, name: &str) -> Self {
        self.schema = Some(name.to_string());
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

/// An interactive natural-deduction proof.
#[derive(Clone, Debug)]
pub struct Proof {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) description: String,
    pub(crate) ledger: Ledger,
    pub(crate) subproofs: SubproofTree,
    pub(crate) goals: GoalTracker,
    pub(crate) latch: StatusLatch,
    pub(crate) logic: Option<String>,
    pub(crate) premises: Vec<Formula>,
    pub(crate) library: Arc<Library>,
    pub(crate) config: EngineConfig,
}

impl Proof {
    /// An empty proof over `library`. When the configuration names a
    /// default logic it is selected immediately.
    pub fn new(name: impl Into<String>, library: Arc<Library>, config: EngineConfig) -> Self {
        let name = name.into();
        let default_logic = config.default_logic.clone();
        let mut proof = Proof {
            display_name: name.clone(),
            name,
            description: String::new(),
            ledger: Ledger::new(),
            subproofs: SubproofTree::new(),
            goals: GoalTracker::new(),
            latch: StatusLatch::new(),
            logic: None,
            premises: Vec::new(),
            library,
            config,
        };
        if let Some(logic) = default_logic {
            proof.set_logic(&logic);
        }
        proof
    }

    /// An empty proof over the built-in logics with default configuration.
    pub fn with_builtins(name: impl Into<String>) -> Self {
        Proof::new(name, Library::shared_builtin(), EngineConfig::default())
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    // ----- read access -------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &ProofStatus {
        self.latch.status()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn lines(&self) -> impl Iterator<Item = &ProofLine> {
        self.ledger.iter().map(|(_, line)| line)
    }

    pub fn line(&self, index: LineIndex) -> Option<&ProofLine> {
        self.ledger.get(index)
    }

    pub fn subproofs(&self) -> &SubproofTree {
        &self.subproofs
    }

    pub fn current_level(&self) -> usize {
        self.subproofs.current_level()
    }

    pub fn current_subproof(&self) -> &Subproof {
        self.subproofs.current()
    }

    pub fn goals(&self) -> &GoalTracker {
        &self.goals
    }

    pub fn logic(&self) -> Option<&str> {
        self.logic.as_deref()
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rule name followed by the references, e.g. `Implication Elim 1, 2`
    /// or `Implication Intro 1-3`. Open subproofs render as `start-`.
    pub fn justification(&self, index: LineIndex) -> Option<String> {
        let line = self.ledger.get(index)?;
        let mut text = line.rule.name().to_string();
        if let Some(schema) = &line.schema {
            text.push(' ');
            text.push_str(schema);
        }
        let refs: Vec<String> = line
            .line_refs
            .iter()
            .map(|r| r.to_string())
            .chain(line.subproof_refs.iter().map(|&id| {
                match self.subproofs.get(id) {
                    Ok(subproof) => match subproof.open_end_index {
                        Some(end) => format!("{}-{}", subproof.start_index, end),
                        None => format!("{}-", subproof.start_index),
                    },
                    Err(_) => format!("#{}", id),
                }
            }))
            .collect();
        if !refs.is_empty() {
            text.push(' ');
            text.push_str(&refs.join(", "));
        }
        Some(text)
    }

    /// Turn a complete proof into a lemma `premises ⊢ goals` over the
    /// proof's logic, with one shared placeholder numbering.
    pub fn to_lemma(&self, name: impl Into<String>) -> ProofResult<NamedSchema> {
        if !self.status().is_complete() {
            return Err(ProofError::ProofNotComplete);
        }
        let logic = self.logic.clone().ok_or(ProofError::NoLogicSelected)?;
        let (premises, conclusion) = self.rule_patterns().ok_or(ProofError::NoGoalDeclared)?;

        Ok(NamedSchema::new(logic, SchemaKind::Lemma, name, premises, conclusion)
            .with_display_name(self.display_name.clone())
            .with_description(self.description.clone()))
    }

    /// The proof read as a rule: premises and the conjoined goals, encoded
    /// with shared numbering. `None` before any goal is declared.
    pub(crate) fn rule_patterns(&self) -> Option<(Vec<Schema>, Schema)> {
        let goals: Vec<Formula> = self.goals.goals().cloned().collect();
        let mut formulas = self.premises.clone();
        formulas.push(Formula::conjoin_all(&goals)?);
        let (mut patterns, _) = encode_all(&formulas);
        let conclusion = patterns.pop()?;
        Some((patterns, conclusion))
    }

    // ----- lifecycle ---------------------------------------------------

    /// Select the logic. Only allowed before the first line is appended.
    pub fn set_logic(&mut self, id: &str) -> StepOutcome {
        if !self.latch.can_proceed() {
            return self.ignored(Rule::SelectLogic);
        }
        let result = if !self.ledger.is_empty() {
            Err(ProofError::LogicAfterProofStarted)
        } else if self.library.logic(id).is_none() {
            Err(ProofError::UnknownLogic(id.to_string()))
        } else {
            Ok(())
        };
        match result {
            Ok(()) => {
                tracing::debug!(proof = %self.name, logic = id, "Logic selected");
                self.logic = Some(id.to_string());
                StepOutcome::Updated
            }
            Err(err) => self.stop(Rule::SelectLogic, &[], err),
        }
    }

    /// Declare a goal. A duplicate goal is not added again, but its
    /// comment still goes on line 0.
    pub fn goal(&mut self, goal: impl IntoFormula) -> StepOutcome {
        self.goal_with_comment(goal, "")
    }

    pub fn goal_with_comment(&mut self, goal: impl IntoFormula, comment: &str) -> StepOutcome {
        if !self.latch.can_proceed() {
            return self.ignored(Rule::Goal);
        }
        let goal = match goal.into_formula() {
            Ok(goal) => goal,
            Err(err) => return self.stop(Rule::Goal, &[], err),
        };
        if !self.goals.declare(goal.clone()) {
            self.ledger.append_header_comment(comment);
            tracing::debug!(proof = %self.name, goal = %goal, "Duplicate goal ignored");
            return StepOutcome::Updated;
        }
        let text = self.goals.joined(&self.config.goal_separator);
        self.ledger.set_goal_text(text);
        self.ledger.append_header_comment(comment);
        tracing::debug!(proof = %self.name, goal = %goal, "Goal declared");
        StepOutcome::Updated
    }

    /// A premise. Premises come before every other line.
    pub fn premise(&mut self, formula: impl IntoFormula) -> StepOutcome {
        self.premise_with_comment(formula, "")
    }

    pub fn premise_with_comment(&mut self, formula: impl IntoFormula, comment: &str) -> StepOutcome {
        let formula = formula.into_formula();
        self.step(Rule::Premise, &[], |proof| {
            let formula = formula?;
            let started = proof.ledger.body().any(|(_, line)| line.rule != Rule::Premise);
            if started || proof.current_level() != 0 {
                return Err(ProofError::PremiseAfterProofStarted);
            }
            Ok(Derivation::new(formula).comment(comment))
        })
    }

    /// Open an ordinary subproof whose first line is the hypothesis.
    pub fn hypothesis(&mut self, formula: impl IntoFormula) -> StepOutcome {
        let formula = formula.into_formula();
        self.step(Rule::Hypothesis, &[], |_| {
            Ok(Derivation::new(formula?).effect(Effect::Open(SubproofKind::Ordinary)))
        })
    }

    /// Another hypothesis for the current subproof; the subproof's
    /// assumption becomes the conjunction of all its hypotheses.
    pub fn add_hypothesis(&mut self, formula: impl IntoFormula) -> StepOutcome {
        let formula = formula.into_formula();
        self.step(Rule::Hypothesis, &[], |proof| {
            let formula = formula?;
            let current = proof.subproofs.current_id();
            if current == ROOT_SUBPROOF {
                return Err(ProofError::NoOpenSubproof(current));
            }
            Ok(Derivation::new(formula).effect(Effect::Hypothesis))
        })
    }

    /// Open a strict subproof without a hypothesis, to be discharged by
    /// necessity introduction.
    pub fn open_strict_subproof(&mut self) -> StepOutcome {
        if let Err(outcome) = self.begin(Rule::Hypothesis, Rule::NecessaryIntro, &[]) {
            return outcome;
        }
        let id = self
            .subproofs
            .open(SubproofKind::Strict, self.ledger.len());
        tracing::debug!(proof = %self.name, subproof = id, "Strict subproof opened");
        StepOutcome::Opened(id)
    }

    /// Open a strict subproof with a witness hypothesis, to be discharged
    /// by possibility elimination.
    pub fn strict_hypothesis(&mut self, formula: impl IntoFormula) -> StepOutcome {
        let formula = formula.into_formula();
        self.apply(Rule::Hypothesis, Rule::PossiblyElim, &[], |_| {
            Ok(Derivation::new(formula?).effect(Effect::Open(SubproofKind::Strict)))
        })
    }

    // ----- shared machinery --------------------------------------------

    /// Validate and commit a rule whose permission is the rule itself.
    pub(crate) fn step<F>(&mut self, rule: Rule, refs: &[LineIndex], validate: F) -> StepOutcome
    where
        F: FnOnce(&Proof) -> ProofResult<Derivation>,
    {
        self.apply(rule, rule, refs, validate)
    }

    /// Validate and commit `rule`, checking `permission` against the logic.
    pub(crate) fn apply<F>(
        &mut self,
        rule: Rule,
        permission: Rule,
        refs: &[LineIndex],
        validate: F,
    ) -> StepOutcome
    where
        F: FnOnce(&Proof) -> ProofResult<Derivation>,
    {
        if let Err(outcome) = self.begin(rule, permission, refs) {
            return outcome;
        }
        match validate(&*self).and_then(|derivation| self.commit(rule, derivation)) {
            Ok(index) => StepOutcome::Appended(index),
            Err(err) => self.stop(rule, refs, err),
        }
    }

    /// The common preconditions. `Err` carries the outcome to return.
    fn begin(
        &mut self,
        rule: Rule,
        permission: Rule,
        refs: &[LineIndex],
    ) -> Result<(), StepOutcome> {
        if !self.latch.can_proceed() {
            return Err(self.ignored(rule));
        }
        match self.check_permission(permission) {
            Ok(()) => Ok(()),
            Err(err) => Err(self.stop(rule, refs, err)),
        }
    }

    fn check_permission(&self, permission: Rule) -> ProofResult<()> {
        let logic_id = self.logic.as_deref().ok_or(ProofError::NoLogicSelected)?;
        if !self.goals.has_goals() {
            return Err(ProofError::NoGoalDeclared);
        }
        let logic = self
            .library
            .logic(logic_id)
            .ok_or_else(|| ProofError::UnknownLogic(logic_id.to_string()))?;
        if !logic.permits(permission) {
            return Err(ProofError::RuleNotPermitted {
                rule: permission.name().to_string(),
                logic: logic_id.to_string(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, rule: Rule, derivation: Derivation) -> ProofResult<LineIndex> {
        let Derivation {
            formula,
            line_refs,
            subproof_refs,
            schema,
            comment,
            effect,
        } = derivation;

        match effect {
            Effect::Open(kind) => {
                let id = self.subproofs.open(kind, self.ledger.len());
                tracing::debug!(proof = %self.name, subproof = id, ?kind, "Subproof opened");
            }
            Effect::Close(id) => {
                self.subproofs.close(id, self.ledger.last_index())?;
                tracing::debug!(proof = %self.name, subproof = id, "Subproof closed");
            }
            Effect::None | Effect::Hypothesis => {}
        }

        let level = self.subproofs.current_level();
        let mut line = ProofLine::new(
            Statement::Formula(formula.clone()),
            level,
            self.subproofs.current_id(),
            rule,
        );
        line.schema = schema;
        line.line_refs = line_refs;
        line.subproof_refs = subproof_refs;
        line.comment = comment;
        let index = self.ledger.append(line);

        if matches!(effect, Effect::Open(_) | Effect::Hypothesis) {
            self.subproofs.register_hypothesis(index);
        }
        if rule == Rule::Premise {
            self.premises.push(formula.clone());
        }
        tracing::debug!(
            proof = %self.name,
            line = index,
            level,
            rule = %rule,
            formula = %formula,
            "Line appended"
        );

        self.check_goals(&formula, level, index);
        Ok(index)
    }

    fn check_goals(&mut self, formula: &Formula, level: usize, index: LineIndex) {
        match self.goals.check(formula, level) {
            GoalCheck::Complete => {
                self.ledger.stamp_last(&self.config.complete_comment);
                self.latch.complete();
                tracing::info!(proof = %self.name, line = index, goal = %formula, "Proof complete");
            }
            GoalCheck::Partial => {
                self.ledger.stamp_last(&self.config.partial_comment);
                tracing::info!(proof = %self.name, line = index, goal = %formula, "Goal proven");
            }
            GoalCheck::NotAGoal => {}
        }
    }

    /// Append the blank marker line and latch the failure.
    fn stop(&mut self, rule: Rule, refs: &[LineIndex], err: ProofError) -> StepOutcome {
        let mut line = ProofLine::new(
            Statement::Blank,
            self.subproofs.current_level(),
            self.subproofs.current_id(),
            rule,
        );
        line.line_refs = refs.to_vec();
        line.comment = err.to_string();
        let index = self.ledger.append(line);
        self.latch.stop(&err);
        tracing::warn!(
            proof = %self.name,
            line = index,
            rule = %rule,
            code = %err.code(),
            error = %err,
            "Proof stopped"
        );
        StepOutcome::Stopped(err.code())
    }

    fn ignored(&self, rule: Rule) -> StepOutcome {
        tracing::trace!(
            proof = %self.name,
            rule = %rule,
            code = %ErrorCode::ProofAlreadyTerminated,
            status = %self.latch.status(),
            "Call ignored"
        );
        StepOutcome::Ignored
    }

    // ----- reference checks used by the rules -------------------------

    /// The formula on line `index`, which must belong to subproof `scope`.
    pub(crate) fn formula_in(&self, index: LineIndex, scope: SubproofId) -> ProofResult<&Formula> {
        let line = self.referenced_line(index)?;
        if line.subproof_id != scope {
            return Err(ProofError::LineOutOfScope {
                line: index,
                line_level: line.level,
                current_level: self.current_level(),
            });
        }
        line.formula().ok_or(ProofError::NoSuchLine(index))
    }

    /// The formula on line `index`, which must be in the current subproof.
    pub(crate) fn statement_in_scope(&self, index: LineIndex) -> ProofResult<&Formula> {
        self.formula_in(index, self.subproofs.current_id())
    }

    /// Any body line; the goal header is not referenceable.
    pub(crate) fn referenced_line(&self, index: LineIndex) -> ProofResult<&ProofLine> {
        if index == 0 {
            return Err(ProofError::NoSuchLine(index));
        }
        self.ledger.get(index).ok_or(ProofError::NoSuchLine(index))
    }

    /// The most recent line, which must belong to the current subproof.
    pub(crate) fn last_in_scope(&self) -> ProofResult<(LineIndex, &Formula)> {
        let index = self.ledger.last_index();
        Ok((index, self.statement_in_scope(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(goal: &str) -> Proof {
        let mut proof = Proof::with_builtins("test");
        proof.set_logic("C");
        proof.goal(goal);
        proof
    }

    #[test]
    fn test_requires_logic_before_premise() {
        let mut proof = Proof::with_builtins("no-logic");
        proof.goal("A");
        assert_eq!(
            proof.premise("A"),
            StepOutcome::Stopped(ErrorCode::NoLogicSelected)
        );
        assert!(proof.ledger().last().statement.is_blank());
    }

    #[test]
    fn test_requires_goal_before_premise() {
        let mut proof = Proof::with_builtins("no-goal");
        proof.set_logic("C");
        assert_eq!(
            proof.premise("A"),
            StepOutcome::Stopped(ErrorCode::NoGoalDeclared)
        );
    }

    #[test]
    fn test_unknown_logic_stops() {
        let mut proof = Proof::with_builtins("bad-logic");
        assert_eq!(
            proof.set_logic("S5"),
            StepOutcome::Stopped(ErrorCode::UnknownLogic)
        );
        assert_eq!(proof.ledger().last().rule, Rule::SelectLogic);
    }

    #[test]
    fn test_logic_fixed_once_started() {
        let mut proof = started("B");
        proof.premise("A");
        assert_eq!(
            proof.set_logic("K"),
            StepOutcome::Stopped(ErrorCode::LogicAfterProofStarted)
        );
    }

    #[test]
    fn test_goal_header_joins_goals() {
        let mut proof = started("A");
        proof.goal_with_comment("B & C", "second goal");
        proof.goal("A");
        let header = proof.ledger().header();
        assert_eq!(header.statement.to_string(), "A, (B ∧ C)");
        assert_eq!(header.comment, "second goal");
    }

    #[test]
    fn test_duplicate_goal_keeps_comment() {
        let mut proof = started("A");
        assert_eq!(proof.goal_with_comment("A", "restated"), StepOutcome::Updated);
        let header = proof.ledger().header();
        assert_eq!(header.statement.to_string(), "A");
        assert_eq!(header.comment, "restated");
        assert_eq!(proof.goals().goals().count(), 1);
    }

    #[test]
    fn test_unparsable_goal_stops() {
        let mut proof = Proof::with_builtins("bad");
        assert_eq!(
            proof.goal("A &"),
            StepOutcome::Stopped(ErrorCode::NotAFormula)
        );
    }

    #[test]
    fn test_premise_after_other_lines() {
        let mut proof = started("B");
        proof.premise("A");
        proof.hypothesis("C");
        assert_eq!(
            proof.premise("D"),
            StepOutcome::Stopped(ErrorCode::PremiseAfterProofStarted)
        );
    }

    #[test]
    fn test_premise_can_complete() {
        let mut proof = started("A");
        assert_eq!(proof.premise("A"), StepOutcome::Appended(1));
        assert!(proof.status().is_complete());
        assert_eq!(proof.ledger().last().comment, "COMPLETE");
        assert_eq!(proof.premise("B"), StepOutcome::Ignored);
        assert_eq!(proof.ledger().len(), 2);
    }

    #[test]
    fn test_partial_completion_stamp() {
        let mut proof = started("A");
        proof.goal("B");
        proof.premise_with_comment("A", "given");
        assert_eq!(proof.ledger().last().comment, "given - PARTIAL COMPLETION");
        assert!(proof.status().is_open());
    }

    #[test]
    fn test_rule_not_permitted() {
        let mut proof = Proof::with_builtins("intuitionistic");
        proof.set_logic("I");
        proof.goal("A");
        proof.premise("~~A");
        assert_eq!(
            proof.double_negation_elim(1),
            StepOutcome::Stopped(ErrorCode::RuleNotPermitted)
        );
    }

    #[test]
    fn test_open_strict_requires_modal_logic() {
        let mut proof = started("A");
        assert_eq!(
            proof.open_strict_subproof(),
            StepOutcome::Stopped(ErrorCode::RuleNotPermitted)
        );
    }

    #[test]
    fn test_default_logic_from_config() {
        let config = EngineConfig {
            default_logic: Some("K".to_string()),
            ..EngineConfig::default()
        };
        let proof = Proof::new("k", Library::shared_builtin(), config);
        assert_eq!(proof.logic(), Some("K"));
    }

    #[test]
    fn test_justification_text() {
        let mut proof = started("(A -> A)");
        proof.hypothesis("A");
        proof.implication_intro();
        assert_eq!(proof.justification(1).unwrap(), "Hypothesis");
        assert_eq!(proof.justification(2).unwrap(), "Implication Intro 1-1");
    }

    #[test]
    fn test_to_lemma() {
        let mut proof = started("B");
        proof.premise("A");
        proof.premise("A -> B");
        assert!(proof.to_lemma("mp").is_err());
        proof.implication_elim(1, 2);
        let lemma = proof.to_lemma("mp").unwrap();
        assert_eq!(lemma.pattern_text(), "{0}, ({0} → {1}) ⊢ {1}");
        assert_eq!(lemma.kind, SchemaKind::Lemma);
        assert_eq!(lemma.logic, "C");
    }
}
