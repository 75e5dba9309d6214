//! Parses one raw CHECK clause into a condition tree.
//!
//! The clause text is split on whitespace and consumed by a two-rule grammar:
//! `Clause := Term (Connective Term)*`, `Term := Operand Operator Operand`.
//! Operand classification folds a pair of quote-parity counters over the
//! token sequence, so a quoted string that happens to spell a column name is
//! never qualified as a column reference.

use crate::ast::{Clause, CompareOp, Connective, Operand, Term};
use std::fmt;

/// Why a clause failed to parse into complete comparison groups.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseShapeError {
    Empty,
    IncompleteComparison,
    UnsupportedOperator(String),
    ExpectedConnective(String),
    DanglingConnective(String),
}

impl fmt::Display for ClauseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseShapeError::Empty => write!(f, "clause is empty"),
            ClauseShapeError::IncompleteComparison => {
                write!(f, "clause ends before a comparison is complete")
            }
            ClauseShapeError::UnsupportedOperator(op) => {
                write!(f, "`{op}` is not a supported comparison operator")
            }
            ClauseShapeError::ExpectedConnective(tok) => {
                write!(f, "expected AND or OR between comparisons, found `{tok}`")
            }
            ClauseShapeError::DanglingConnective(conn) => {
                write!(f, "`{conn}` is not followed by a comparison")
            }
        }
    }
}

/// A whitespace-delimited clause token plus its string-literal context.
#[derive(Debug, Clone, PartialEq)]
struct ScannedToken {
    text: String,
    column_ref: bool,
}

/// Parses `raw` against the declared column set.
pub fn parse_clause(raw: &str, columns: &[String]) -> Result<Clause, ClauseShapeError> {
    let tokens = scan(raw, columns);
    if tokens.is_empty() {
        return Err(ClauseShapeError::Empty);
    }

    let mut pos = 0;
    let first = parse_term(&tokens, &mut pos)?;
    let mut rest = Vec::new();
    while pos < tokens.len() {
        let connective = match tokens[pos].text.as_str() {
            "AND" => Connective::And,
            "OR" => Connective::Or,
            other => return Err(ClauseShapeError::ExpectedConnective(other.to_string())),
        };
        pos += 1;
        if pos == tokens.len() {
            return Err(ClauseShapeError::DanglingConnective(connective.to_string()));
        }
        let term = parse_term(&tokens, &mut pos)?;
        rest.push((connective, term));
    }

    Ok(Clause { first, rest })
}

fn parse_term(tokens: &[ScannedToken], pos: &mut usize) -> Result<Term, ClauseShapeError> {
    let left = next_token(tokens, pos)?;
    let op_token = next_token(tokens, pos)?;
    let op = CompareOp::parse(&op_token.text)
        .ok_or_else(|| ClauseShapeError::UnsupportedOperator(op_token.text.clone()))?;
    let right = next_token(tokens, pos)?;
    Ok(Term {
        left: to_operand(left),
        op,
        right: to_operand(right),
    })
}

fn next_token<'a>(
    tokens: &'a [ScannedToken],
    pos: &mut usize,
) -> Result<&'a ScannedToken, ClauseShapeError> {
    let token = tokens.get(*pos).ok_or(ClauseShapeError::IncompleteComparison)?;
    *pos += 1;
    Ok(token)
}

fn to_operand(token: &ScannedToken) -> Operand {
    if token.column_ref {
        Operand::ColumnRef(token.text.clone())
    } else {
        Operand::Literal(token.text.clone())
    }
}

/// Whitespace-splits `raw` and classifies each token. A token's own quote
/// characters count toward the parity before the column match is tested,
/// so an opening quote disqualifies its own token as well as everything up
/// to the closing quote.
fn scan(raw: &str, columns: &[String]) -> Vec<ScannedToken> {
    let mut single_parity = 0usize;
    let mut double_parity = 0usize;
    raw.split_whitespace()
        .map(|tok| {
            single_parity += tok.matches('\'').count();
            double_parity += tok.matches('"').count();
            let outside_string = single_parity % 2 == 0 && double_parity % 2 == 0;
            ScannedToken {
                text: tok.to_string(),
                column_ref: outside_string && columns.iter().any(|c| c == tok),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_single_comparison() {
        let clause = parse_clause("A > 0", &cols(&["A"])).unwrap();
        assert_eq!(
            clause.first,
            Term {
                left: Operand::ColumnRef("A".into()),
                op: CompareOp::Gt,
                right: Operand::Literal("0".into()),
            }
        );
        assert!(clause.rest.is_empty());
    }

    #[test]
    fn test_compound_clause_classifies_both_operands() {
        let clause = parse_clause("A > 0 AND B < A", &cols(&["A", "B"])).unwrap();
        assert_eq!(clause.term_count(), 2);
        let (conn, second) = &clause.rest[0];
        assert_eq!(*conn, Connective::And);
        assert_eq!(second.left, Operand::ColumnRef("B".into()));
        assert_eq!(second.right, Operand::ColumnRef("A".into()));
    }

    #[test]
    fn test_quoted_literal_is_not_a_column() {
        let clause = parse_clause("STATUS <> 'NAME'", &cols(&["STATUS", "NAME"])).unwrap();
        assert_eq!(clause.first.left, Operand::ColumnRef("STATUS".into()));
        assert_eq!(clause.first.right, Operand::Literal("'NAME'".into()));
    }

    #[test]
    fn test_bare_token_inside_open_string_is_not_a_column() {
        // the literal spans several whitespace tokens; B sits inside it
        let tokens = scan("A <> 'X B Y' AND B > 0", &cols(&["A", "B"]));
        let b_inside = tokens.iter().find(|t| t.text == "B").unwrap();
        assert!(!b_inside.column_ref);
        // the parity closes with the literal, so the later B qualifies again
        let b_outside = tokens.iter().rfind(|t| t.text == "B").unwrap();
        assert!(b_outside.column_ref);
    }

    #[test]
    fn test_multi_word_string_fails_structurally() {
        let err = parse_clause("A <> 'X B Y'", &cols(&["A"])).unwrap_err();
        assert_eq!(err, ClauseShapeError::ExpectedConnective("B".into()));
    }

    #[test]
    fn test_incomplete_group_is_rejected() {
        let err = parse_clause("A >", &cols(&["A"])).unwrap_err();
        assert_eq!(err, ClauseShapeError::IncompleteComparison);
    }

    #[test]
    fn test_empty_clause_is_rejected() {
        assert_eq!(parse_clause("  ", &[]).unwrap_err(), ClauseShapeError::Empty);
    }

    #[test]
    fn test_dangling_connective_is_rejected() {
        let err = parse_clause("A > 0 AND", &cols(&["A"])).unwrap_err();
        assert_eq!(err, ClauseShapeError::DanglingConnective("AND".into()));
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let err = parse_clause("A LIKE 'X%'", &cols(&["A"])).unwrap_err();
        assert_eq!(err, ClauseShapeError::UnsupportedOperator("LIKE".into()));
    }

    #[test]
    fn test_stray_token_between_terms_is_rejected() {
        let err = parse_clause("A > 0 B < 1", &cols(&["A", "B"])).unwrap_err();
        assert_eq!(err, ClauseShapeError::ExpectedConnective("B".into()));
    }
}
