//! Nested scopes (blocks) over the ledger.
//!
//! Subproof 0 is the root at level 0. Opening a subproof nests it under the
//! current one and makes it current; closing is only ever done on the
//! current subproof and hands control back to its parent.

use natded_ir::Formula;
use serde::{Deserialize, Serialize};

use crate::error::{ProofError, ProofResult};
use crate::ledger::{Ledger, LineIndex};

pub type SubproofId = usize;

pub const ROOT_SUBPROOF: SubproofId = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubproofKind {
    #[default]
    Ordinary,
    /// Only necessary formulas may be reiterated into it (modal logics).
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subproof {
    pub id: SubproofId,
    pub level: usize,
    /// `None` for the root only.
    pub parent_id: Option<SubproofId>,
    /// Ledger index of the first line that can belong to this subproof.
    pub start_index: LineIndex,
    pub hypothesis_lines: Vec<LineIndex>,
    /// Last line of the subproof, set once when it is closed.
    pub open_end_index: Option<LineIndex>,
    pub kind: SubproofKind,
}

impl Subproof {
    pub fn is_closed(&self) -> bool {
        self.open_end_index.is_some()
    }

    /// First and last line of a closed subproof, e.g. `(3, 7)` rendered `3-7`.
    pub fn span(&self) -> ProofResult<(LineIndex, LineIndex)> {
        match self.open_end_index {
            Some(end) => Ok((self.start_index, end)),
            None => Err(ProofError::SubproofNotClosed(self.id)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubproofTree {
    subproofs: Vec<Subproof>,
    current: SubproofId,
}

impl Default for SubproofTree {
    fn default() -> Self {
        SubproofTree::new()
    }
}

impl SubproofTree {
    pub fn new() -> Self {
        SubproofTree {
            subproofs: vec![Subproof {
                id: ROOT_SUBPROOF,
                level: 0,
                parent_id: None,
                start_index: 1,
                hypothesis_lines: Vec::new(),
                open_end_index: None,
                kind: SubproofKind::Ordinary,
            }],
            current: ROOT_SUBPROOF,
        }
    }

    pub fn current_id(&self) -> SubproofId {
        self.current
    }

    pub fn current(&self) -> &Subproof {
        &self.subproofs[self.current]
    }

    pub fn current_level(&self) -> usize {
        self.current().level
    }

    pub fn get(&self, id: SubproofId) -> ProofResult<&Subproof> {
        self.subproofs.get(id).ok_or(ProofError::NoSuchSubproof(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subproof> {
        self.subproofs.iter()
    }

    /// Number of subproofs ever opened, excluding the root.
    pub fn opened_count(&self) -> usize {
        self.subproofs.len() - 1
    }

    pub fn closed_count(&self) -> usize {
        self.subproofs.iter().filter(|s| s.is_closed()).count()
    }

    /// Open a child of the current subproof whose first line will be
    /// `next_index`, and make it current.
    pub fn open(&mut self, kind: SubproofKind, next_index: LineIndex) -> SubproofId {
        let id = self.subproofs.len();
        let parent = self.current();
        let subproof = Subproof {
            id,
            level: parent.level + 1,
            parent_id: Some(parent.id),
            start_index: next_index,
            hypothesis_lines: Vec::new(),
            open_end_index: None,
            kind,
        };
        self.subproofs.push(subproof);
        self.current = id;
        id
    }

    /// Close `id`, which must be the current subproof and not the root.
    /// `last_index` is the ledger index of its final line.
    pub fn close(&mut self, id: SubproofId, last_index: LineIndex) -> ProofResult<()> {
        if id == ROOT_SUBPROOF {
            return Err(ProofError::CannotCloseRootSubproof);
        }
        if id != self.current {
            return Err(ProofError::NoOpenSubproof(id));
        }
        let subproof = &mut self.subproofs[id];
        let parent = subproof.parent_id.ok_or(ProofError::CannotCloseRootSubproof)?;
        subproof.open_end_index = Some(last_index);
        self.current = parent;
        Ok(())
    }

    pub(crate) fn register_hypothesis(&mut self, line: LineIndex) {
        let current = self.current;
        self.subproofs[current].hypothesis_lines.push(line);
    }

    /// Ids from `id` up to and including the root.
    pub fn ancestors(&self, id: SubproofId) -> impl Iterator<Item = &Subproof> + '_ {
        std::iter::successors(self.subproofs.get(id), move |s| {
            s.parent_id.and_then(|p| self.subproofs.get(p))
        })
    }

    /// True when `ancestor` lies strictly above `id` on its path to the root.
    pub fn is_proper_ancestor(&self, ancestor: SubproofId, id: SubproofId) -> bool {
        ancestor != id && self.ancestors(id).any(|s| s.id == ancestor)
    }

    /// Whether a strict subproof sits between `ancestor` (exclusive) and
    /// `id` (inclusive).
    pub fn crosses_strict(&self, ancestor: SubproofId, id: SubproofId) -> bool {
        self.ancestors(id)
            .take_while(|s| s.id != ancestor)
            .any(|s| s.kind == SubproofKind::Strict)
    }

    /// The subproof's assumption: its hypothesis lines conjoined in order.
    pub fn hypothesis_of(&self, id: SubproofId, ledger: &Ledger) -> ProofResult<Formula> {
        let subproof = self.get(id)?;
        let parts = subproof
            .hypothesis_lines
            .iter()
            .map(|&index| {
                ledger
                    .get(index)
                    .and_then(|line| line.formula())
                    .cloned()
                    .ok_or(ProofError::NoSuchLine(index))
            })
            .collect::<ProofResult<Vec<_>>>()?;
        Formula::conjoin_all(&parts).ok_or(ProofError::NotOrdinarySubproof(id))
    }
}
