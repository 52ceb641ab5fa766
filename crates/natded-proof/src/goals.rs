//! Declared goals and which of them have been derived at the outermost level.

use indexmap::IndexSet;
use natded_ir::Formula;
use serde::{Deserialize, Serialize};

/// Result of checking a freshly appended line against the goals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalCheck {
    /// Not a goal, already proven, or derived inside a subproof.
    NotAGoal,
    /// A new goal was proven but others remain.
    Partial,
    /// The last outstanding goal was proven.
    Complete,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTracker {
    goals: IndexSet<Formula>,
    proven: IndexSet<Formula>,
}

impl GoalTracker {
    pub fn new() -> Self {
        GoalTracker::default()
    }

    /// Add a goal. Returns `false` (and changes nothing) for a duplicate.
    pub fn declare(&mut self, goal: Formula) -> bool {
        self.goals.insert(goal)
    }

    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    pub fn goals(&self) -> impl Iterator<Item = &Formula> {
        self.goals.iter()
    }

    pub fn proven(&self) -> impl Iterator<Item = &Formula> {
        self.proven.iter()
    }

    pub fn is_proven(&self, goal: &Formula) -> bool {
        self.proven.contains(goal)
    }

    pub fn all_proven(&self) -> bool {
        self.has_goals() && self.proven.len() == self.goals.len()
    }

    /// Text stored in the goal header, goals joined by `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.goals
            .iter()
            .map(|goal| goal.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Record `formula` as proven when it is an outstanding goal derived at
    /// level 0.
    pub fn check(&mut self, formula: &Formula, level: usize) -> GoalCheck {
        if level != 0 || !self.goals.contains(formula) || self.proven.contains(formula) {
            return GoalCheck::NotAGoal;
        }
        self.proven.insert(formula.clone());
        if self.all_proven() {
            GoalCheck::Complete
        } else {
            GoalCheck::Partial
        }
    }
}
