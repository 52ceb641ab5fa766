//! Display and LaTeX rendering for formulas and schema patterns.
//!
//! Binary connectives are always parenthesised so the text form is
//! unambiguous and parses back to the same tree.

use std::fmt::{self, Write};

use crate::{formula::Formula, schema::Schema};

struct Notation {
    falsehood: &'static str,
    truth: &'static str,
    not: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
    necessary: &'static str,
    possibly: &'static str,
}

const TEXT: Notation = Notation {
    falsehood: "⊥",
    truth: "⊤",
    not: "¬",
    and: " ∧ ",
    or: " ∨ ",
    implies: " → ",
    iff: " ↔ ",
    necessary: "□",
    possibly: "◇",
};

const LATEX: Notation = Notation {
    falsehood: "\\bot",
    truth: "\\top",
    not: "\\lnot ",
    and: " \\land ",
    or: " \\lor ",
    implies: " \\to ",
    iff: " \\leftrightarrow ",
    necessary: "\\Box ",
    possibly: "\\Diamond ",
};

fn write_formula<W: Write>(out: &mut W, formula: &Formula, n: &Notation) -> fmt::Result {
    match formula {
        Formula::Proposition(name) => out.write_str(name),
        Formula::Falsehood => out.write_str(n.falsehood),
        Formula::Truth => out.write_str(n.truth),
        Formula::Not(inner) => {
            out.write_str(n.not)?;
            write_formula(out, inner, n)
        }
        Formula::Necessary(inner) => {
            out.write_str(n.necessary)?;
            write_formula(out, inner, n)
        }
        Formula::Possibly(inner) => {
            out.write_str(n.possibly)?;
            write_formula(out, inner, n)
        }
        Formula::And(l, r) => write_binary(out, l, n.and, r, n),
        Formula::Or(l, r) => write_binary(out, l, n.or, r, n),
        Formula::Implies(a, c) => write_binary(out, a, n.implies, c, n),
        Formula::Iff(l, r) => write_binary(out, l, n.iff, r, n),
    }
}

fn write_binary<W: Write>(
    out: &mut W,
    left: &Formula,
    op: &str,
    right: &Formula,
    n: &Notation,
) -> fmt::Result {
    out.write_char('(')?;
    write_formula(out, left, n)?;
    out.write_str(op)?;
    write_formula(out, right, n)?;
    out.write_char(')')
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_formula(f, self, &TEXT)
    }
}

impl Formula {
    /// LaTeX math-mode rendering, e.g. `(A \land \lnot B)`.
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_formula(&mut out, self, &LATEX);
        out
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = &TEXT;
        match self {
            Schema::Placeholder(i) => write!(f, "{{{}}}", i),
            Schema::Atom(name) => f.write_str(name),
            Schema::Falsehood => f.write_str(n.falsehood),
            Schema::Truth => f.write_str(n.truth),
            Schema::Not(inner) => write!(f, "{}{}", n.not, inner),
            Schema::Necessary(inner) => write!(f, "{}{}", n.necessary, inner),
            Schema::Possibly(inner) => write!(f, "{}{}", n.possibly, inner),
            Schema::And(l, r) => write!(f, "({}{}{})", l, n.and, r),
            Schema::Or(l, r) => write!(f, "({}{}{})", l, n.or, r),
            Schema::Implies(a, c) => write!(f, "({}{}{})", a, n.implies, c),
            Schema::Iff(l, r) => write!(f, "({}{}{})", l, n.iff, r),
        }
    }
}
