//! Text parser for formulas and schema patterns.
//!
//! Supports:
//! - Propositions: `A`, `Rain`, `p1`
//! - Constants: `⊥` / `_|_` / `FALSE`, `⊤` / `TRUE`
//! - Negation: `¬`, `~`, `!`, `NOT`
//! - Conjunction: `∧`, `&`, `&&`, `AND`
//! - Disjunction: `∨`, `|`, `||`, `OR`
//! - Implication: `→`, `->`, `=>`, `IMPLIES` (right associative)
//! - Biconditional: `↔`, `<->`, `<=>`, `IFF`
//! - Modalities: `□` / `[]` / `BOX`, `◇` / `<>` / `DIAMOND`
//! - Placeholders `{0}`, `{1}` (schema patterns only)
//! - Parentheses for grouping
//!
//! Whatever [`std::fmt::Display`] prints for a [`Formula`] or [`Schema`]
//! parses back to the same value.

use std::str::FromStr;

use crate::error::IrError;
use crate::formula::Formula;
use crate::schema::Schema;

/// Largest `{n}` index accepted in a pattern.
pub const MAX_PLACEHOLDER: usize = 1 << 16;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Necessary,
    Possibly,
    Falsehood,
    Truth,
    Comma,
    Turnstile,
    Atom(String),
    Placeholder(usize),
}

// Operator precedence (lowest to highest):
// 1. IFF (↔)
// 2. IMPLIES (→), right associative
// 3. OR (∨)
// 4. AND (∧)
// 5. Unary: NOT (¬), BOX (□), DIAMOND (◇)
// 6. Atoms, constants, placeholders, parentheses

/// Parse a formula; placeholders are rejected.
pub fn parse_formula(input: &str) -> Result<Formula, IrError> {
    let schema = parse_schema(input)?;
    schema
        .to_formula()
        .ok_or_else(|| IrError::not_a_formula(input, "placeholders are only allowed in schemas"))
}

/// Check that every proposition in `formula` prints as a name the parser
/// reads back as the same proposition: an identifier that is not a keyword.
pub fn check_propositions(formula: &Formula) -> Result<(), IrError> {
    match formula
        .propositions()
        .into_iter()
        .find(|name| !is_proposition_name(name))
    {
        Some(name) => Err(IrError::not_a_formula(
            formula.to_string(),
            format!("'{}' is not a valid proposition name", name),
        )),
        None => Ok(()),
    }
}

fn is_proposition_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars.next().is_some_and(char::is_alphabetic);
    starts_well
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '\'')
        && keyword(name).is_none()
}

/// Parse a schema pattern such as `({0} → ({1} → {0}))`.
pub fn parse_schema(input: &str) -> Result<Schema, IrError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
    };
    let schema = parser.parse_iff()?;
    parser.expect_end()?;
    Ok(schema)
}

/// Parse a rule pattern `p1, p2, ... ⊢ c` (also `|-`).
///
/// Without a turnstile the whole input is the conclusion and the premise
/// list is empty, which is how axioms are written.
pub fn parse_rule_pattern(input: &str) -> Result<(Vec<Schema>, Schema), IrError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
    };

    let has_turnstile = parser.tokens.contains(&Token::Turnstile);
    let mut premises = Vec::new();
    if has_turnstile {
        if parser.peek() != Some(&Token::Turnstile) {
            loop {
                premises.push(parser.parse_iff()?);
                if parser.peek() == Some(&Token::Comma) {
                    parser.pos += 1;
                } else {
                    break;
                }
            }
        }
        parser.expect(Token::Turnstile)?;
    }
    let conclusion = parser.parse_iff()?;
    parser.expect_end()?;
    Ok((premises, conclusion))
}

impl FromStr for Formula {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl FromStr for Schema {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_schema(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, reason: impl Into<String>) -> IrError {
        IrError::not_a_formula(self.input, reason)
    }

    fn expect(&mut self, expected: Token) -> Result<(), IrError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(self.error(format!("expected {:?}, found {:?}", expected, token))),
            None => Err(self.error(format!("expected {:?}, found end of input", expected))),
        }
    }

    fn expect_end(&self) -> Result<(), IrError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error(format!("unexpected trailing {:?}", token))),
        }
    }

    fn parse_iff(&mut self) -> Result<Schema, IrError> {
        let left = self.parse_implication()?;
        if self.peek() == Some(&Token::Iff) {
            self.pos += 1;
            let right = self.parse_iff()?;
            return Ok(Schema::iff(left, right));
        }
        Ok(left)
    }

    fn parse_implication(&mut self) -> Result<Schema, IrError> {
        let left = self.parse_or()?;
        if self.peek() == Some(&Token::Implies) {
            self.pos += 1;
            let right = self.parse_implication()?;
            return Ok(Schema::imply(left, right));
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Schema, IrError> {
        let mut left = self.parse_and()?;
        while self.peek() == Some(&Token::Or) {
            self.pos += 1;
            let right = self.parse_and()?;
            left = Schema::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Schema, IrError> {
        let mut left = self.parse_unary()?;
        while self.peek() == Some(&Token::And) {
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Schema::and(left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Schema, IrError> {
        match self.peek() {
            Some(Token::Not) => {
                self.pos += 1;
                Ok(Schema::negate(self.parse_unary()?))
            }
            Some(Token::Necessary) => {
                self.pos += 1;
                Ok(Schema::necessary(self.parse_unary()?))
            }
            Some(Token::Possibly) => {
                self.pos += 1;
                Ok(Schema::possibly(self.parse_unary()?))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Schema, IrError> {
        match self.next() {
            Some(Token::LParen) => {
                let inner = self.parse_iff()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Some(Token::Atom(name)) => Ok(Schema::Atom(name)),
            Some(Token::Placeholder(i)) => Ok(Schema::Placeholder(i)),
            Some(Token::Falsehood) => Ok(Schema::Falsehood),
            Some(Token::Truth) => Ok(Schema::Truth),
            Some(token) => Err(self.error(format!("unexpected {:?}", token))),
            None => Err(self.error("unexpected end of input")),
        }
    }
}

fn keyword(word: &str) -> Option<Token> {
    let token = match word {
        "NOT" | "not" => Token::Not,
        "AND" | "and" => Token::And,
        "OR" | "or" => Token::Or,
        "IMPLIES" | "implies" => Token::Implies,
        "IFF" | "iff" => Token::Iff,
        "BOX" => Token::Necessary,
        "DIAMOND" => Token::Possibly,
        "FALSE" => Token::Falsehood,
        "TRUE" => Token::Truth,
        _ => return None,
    };
    Some(token)
}

/// ASCII spellings, longest first so `<->` wins over `<>`.
const SYMBOLS: &[(&str, Token)] = &[
    ("_|_", Token::Falsehood),
    ("<->", Token::Iff),
    ("<=>", Token::Iff),
    ("->", Token::Implies),
    ("=>", Token::Implies),
    ("|-", Token::Turnstile),
    ("&&", Token::And),
    ("||", Token::Or),
    ("[]", Token::Necessary),
    ("<>", Token::Possibly),
    ("&", Token::And),
    ("|", Token::Or),
    ("~", Token::Not),
    ("!", Token::Not),
];

fn tokenize(input: &str) -> Result<Vec<Token>, IrError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    'outer: while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        for (symbol, token) in SYMBOLS {
            if let Some(after) = rest.strip_prefix(symbol) {
                tokens.push(token.clone());
                rest = after;
                continue 'outer;
            }
        }

        let single = match c {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            '¬' => Some(Token::Not),
            '∧' => Some(Token::And),
            '∨' => Some(Token::Or),
            '→' => Some(Token::Implies),
            '↔' => Some(Token::Iff),
            '□' => Some(Token::Necessary),
            '◇' => Some(Token::Possibly),
            '⊥' => Some(Token::Falsehood),
            '⊤' => Some(Token::Truth),
            '⊢' => Some(Token::Turnstile),
            _ => None,
        };
        if let Some(token) = single {
            tokens.push(token);
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '{' {
            let close = rest
                .find('}')
                .ok_or_else(|| IrError::not_a_formula(input, "unterminated placeholder"))?;
            let index = rest[1..close]
                .trim()
                .parse::<usize>()
                .map_err(|_| IrError::not_a_formula(input, "placeholder index must be a number"))?;
            if index > MAX_PLACEHOLDER {
                return Err(IrError::not_a_formula(input, "placeholder index is too large"));
            }
            tokens.push(Token::Placeholder(index));
            rest = &rest[close + 1..];
            continue;
        }

        if c.is_alphabetic() {
            let end = rest
                .char_indices()
                .find(|(_, ch)| !(ch.is_alphanumeric() || *ch == '_' || *ch == '\''))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let word = &rest[..end];
            tokens.push(keyword(word).unwrap_or_else(|| Token::Atom(word.to_string())));
            rest = &rest[end..];
            continue;
        }

        return Err(IrError::not_a_formula(
            input,
            format!("unexpected character '{}'", c),
        ));
    }

    if tokens.is_empty() {
        return Err(IrError::not_a_formula(input, "empty expression"));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Formula {
        Formula::prop("A")
    }

    fn b() -> Formula {
        Formula::prop("B")
    }

    #[test]
    fn test_simple_proposition() {
        assert_eq!(parse_formula("A").unwrap(), a());
        assert_eq!(parse_formula("  Rain_2 ").unwrap(), Formula::prop("Rain_2"));
    }

    #[test]
    fn test_precedence() {
        let f = parse_formula("A & B -> A | ~B").unwrap();
        assert_eq!(
            f,
            Formula::imply(
                Formula::and(a(), b()),
                Formula::or(a(), Formula::negate(b()))
            )
        );
    }

    #[test]
    fn test_implication_is_right_associative() {
        let f = parse_formula("A -> B -> A").unwrap();
        assert_eq!(f, Formula::imply(a(), Formula::imply(b(), a())));
    }

    #[test]
    fn test_keywords_and_constants() {
        let f = parse_formula("NOT A IMPLIES FALSE").unwrap();
        assert_eq!(f, Formula::imply(Formula::negate(a()), Formula::falsehood()));
        assert_eq!(parse_formula("_|_").unwrap(), Formula::falsehood());
        assert_eq!(parse_formula("⊤").unwrap(), Formula::truth());
    }

    #[test]
    fn test_modal_operators() {
        let f = parse_formula("[]A <-> <>~B").unwrap();
        assert_eq!(
            f,
            Formula::iff(
                Formula::necessary(a()),
                Formula::possibly(Formula::negate(b()))
            )
        );
    }

    #[test]
    fn test_display_output_parses_back() {
        let f = Formula::iff(
            Formula::necessary(Formula::imply(a(), Formula::falsehood())),
            Formula::or(Formula::negate(Formula::and(a(), b())), Formula::truth()),
        );
        assert_eq!(parse_formula(&f.to_string()).unwrap(), f);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(parse_formula(""), Err(IrError::NotAFormula { .. })));
        assert!(matches!(parse_formula("(A & B"), Err(IrError::NotAFormula { .. })));
        assert!(matches!(parse_formula("A B"), Err(IrError::NotAFormula { .. })));
        assert!(matches!(parse_formula("A & #"), Err(IrError::NotAFormula { .. })));
        assert!(matches!(parse_formula("{0} -> A"), Err(IrError::NotAFormula { .. })));
    }

    #[test]
    fn test_schema_placeholders() {
        let s = parse_schema("({0} → ({1} → {0}))").unwrap();
        assert_eq!(s.arity(), 2);
        assert_eq!(s.to_string(), "({0} → ({1} → {0}))");
    }

    #[test]
    fn test_rule_pattern() {
        let (premises, conclusion) = parse_rule_pattern("({0} → {1}), {0} ⊢ {1}").unwrap();
        assert_eq!(premises.len(), 2);
        assert_eq!(conclusion, Schema::placeholder(1));

        let (premises, conclusion) = parse_rule_pattern("{0} -> {0}").unwrap();
        assert!(premises.is_empty());
        assert_eq!(conclusion.arity(), 1);

        let (premises, _) = parse_rule_pattern("|- TRUE").unwrap();
        assert!(premises.is_empty());
    }

    #[test]
    fn test_rejects_oversized_placeholder() {
        let text = "{18446744073709551615}";
        assert!(matches!(parse_formula(text), Err(IrError::NotAFormula { .. })));
        assert!(matches!(parse_schema(text), Err(IrError::NotAFormula { .. })));
        assert!(matches!(
            parse_rule_pattern("{0} |- {99999999}"),
            Err(IrError::NotAFormula { .. })
        ));
        let edge = format!("{{{}}}", MAX_PLACEHOLDER);
        assert_eq!(parse_schema(&edge).unwrap().arity(), MAX_PLACEHOLDER + 1);
    }


    #[test]
    fn test_check_propositions() {
        let ok = Formula::imply(Formula::prop("Rain_2"), Formula::prop("p'"));
        assert!(check_propositions(&ok).is_ok());
        for name in ["TRUE", "NOT", "or", "p q", "", "2x", "A&B"] {
            let f = Formula::and(a(), Formula::prop(name));
            assert!(
                matches!(check_propositions(&f), Err(IrError::NotAFormula { .. })),
                "{:?} should be rejected",
                name
            );
        }
    }

}
