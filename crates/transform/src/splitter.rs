//! Separates inline `CHECK (...)` clauses from a table body.
//!
//! The body is processed one top-level comma-separated item at a time. Within
//! an item, a `CHECK` keyword followed by a balanced parenthesized group is
//! recorded as a clause and removed; a `CONSTRAINT <name>` prefix attached to
//! the clause is removed with it, and an item emptied by the removal is
//! dropped together with its separating comma. Every other token survives
//! verbatim and in order.

use crate::columns::split_top_level;
use crate::lexer::render_tokens;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, Word};

/// The raw text of one extracted clause and its declaration-order ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckClause {
    pub raw: String,
    pub ordinal: usize,
}

/// Result of splitting one table body.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBody {
    pub clauses: Vec<CheckClause>,
    /// The reassembled body text with all check clauses removed.
    pub body: String,
}

/// Partitions `body` into extracted check clauses and the remaining body
/// text. A body without a parenthesized list passes through unchanged.
pub fn split(body: &[Token]) -> SplitBody {
    let open = body.iter().position(|t| matches!(t, Token::LParen));
    let close = body.iter().rposition(|t| matches!(t, Token::RParen));
    let (Some(open), Some(close)) = (open, close) else {
        return SplitBody {
            clauses: Vec::new(),
            body: render_tokens(body).trim().to_string(),
        };
    };
    if close <= open {
        return SplitBody {
            clauses: Vec::new(),
            body: render_tokens(body).trim().to_string(),
        };
    }

    let mut clauses = Vec::new();
    let mut ordinal = 0;
    let mut items = Vec::new();
    for segment in split_top_level(&body[open + 1..close]) {
        if let Some(kept) = strip_checks(segment, &mut clauses, &mut ordinal) {
            items.push(kept);
        }
    }

    let mut text = String::new();
    let prefix = render_tokens(&body[..open]);
    if !prefix.trim().is_empty() {
        text.push_str(prefix.trim());
        text.push(' ');
    }
    text.push('(');
    text.push_str(&items.join(", "));
    text.push(')');
    let suffix = render_tokens(&body[close + 1..]);
    if !suffix.trim().is_empty() {
        text.push(' ');
        text.push_str(suffix.trim());
    }

    SplitBody {
        clauses,
        body: text,
    }
}

/// Removes every `CHECK (...)` group from one body item, recording the
/// clause texts. Returns `None` when nothing substantive remains.
fn strip_checks(
    item: &[Token],
    clauses: &mut Vec<CheckClause>,
    ordinal: &mut usize,
) -> Option<String> {
    let mut kept: Vec<Token> = Vec::new();
    let mut depth: usize = 0;
    let mut i = 0;
    while i < item.len() {
        let token = &item[i];
        match token {
            Token::LParen => {
                depth += 1;
                push(&mut kept, token.clone());
                i += 1;
            }
            Token::RParen => {
                depth = depth.saturating_sub(1);
                push(&mut kept, token.clone());
                i += 1;
            }
            Token::Word(word)
                if depth == 0 && word.quote_style.is_none() && word.keyword == Keyword::CHECK =>
            {
                let mut group = i + 1;
                while group < item.len() && matches!(item[group], Token::Whitespace(_)) {
                    group += 1;
                }
                let end = if group < item.len() && matches!(item[group], Token::LParen) {
                    matching_rparen(item, group)
                } else {
                    None
                };
                match end {
                    Some(end) => {
                        pop_constraint_prefix(&mut kept);
                        let raw = render_tokens(&item[group + 1..end]).trim().to_string();
                        clauses.push(CheckClause {
                            raw,
                            ordinal: *ordinal,
                        });
                        *ordinal += 1;
                        i = end + 1;
                    }
                    // CHECK without a following group is not a constraint we
                    // recognize; let it pass through untouched
                    None => {
                        push(&mut kept, token.clone());
                        i += 1;
                    }
                }
            }
            _ => {
                push(&mut kept, token.clone());
                i += 1;
            }
        }
    }

    while matches!(kept.first(), Some(Token::Whitespace(_))) {
        kept.remove(0);
    }
    while matches!(kept.last(), Some(Token::Whitespace(_))) {
        kept.pop();
    }
    if kept.is_empty() {
        None
    } else {
        Some(render_tokens(&kept))
    }
}

fn push(kept: &mut Vec<Token>, token: Token) {
    if matches!(token, Token::Whitespace(_)) && matches!(kept.last(), Some(Token::Whitespace(_))) {
        return;
    }
    kept.push(token);
}

/// Index of the `)` closing the `(` at `open`, scanning with depth.
fn matching_rparen(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth: usize = 0;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Drops a trailing `CONSTRAINT <name>` so named check constraints do not
/// leave a dangling fragment once their clause is removed.
fn pop_constraint_prefix(kept: &mut Vec<Token>) {
    let Some(last) = kept.iter().rposition(|t| !matches!(t, Token::Whitespace(_))) else {
        return;
    };
    if !matches!(kept[last], Token::Word(_)) {
        return;
    }
    let Some(prev) = kept[..last]
        .iter()
        .rposition(|t| !matches!(t, Token::Whitespace(_)))
    else {
        return;
    };
    if matches!(
        &kept[prev],
        Token::Word(Word { keyword: Keyword::CONSTRAINT, quote_style: None, .. })
    ) {
        kept.truncate(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn body_of(sql: &str) -> Vec<Token> {
        let tokens = lexer::tokenize(sql).unwrap();
        let statements = crate::statement::split_statements(&tokens);
        crate::statement::parse_table_statement(&statements[0])
            .unwrap()
            .body
    }

    #[test]
    fn test_inline_check_is_removed_and_recorded() {
        let result = split(&body_of("CREATE TABLE T (ID INT CHECK (ID > 0), NAME TEXT);"));
        assert_eq!(result.body, "(ID INT, NAME TEXT)");
        assert_eq!(result.clauses.len(), 1);
        assert_eq!(result.clauses[0].raw, "ID > 0");
        assert_eq!(result.clauses[0].ordinal, 0);
    }

    #[test]
    fn test_tokens_after_the_clause_survive() {
        let result = split(&body_of("CREATE TABLE T (ID INT CHECK (ID > 0) NOT NULL);"));
        assert_eq!(result.body, "(ID INT NOT NULL)");
    }

    #[test]
    fn test_named_constraint_is_removed_whole() {
        let result = split(&body_of(
            "CREATE TABLE T (A INT, CONSTRAINT A_POSITIVE CHECK (A > 0));",
        ));
        assert_eq!(result.body, "(A INT)");
        assert_eq!(result.clauses.len(), 1);
        assert_eq!(result.clauses[0].raw, "A > 0");
    }

    #[test]
    fn test_clause_ordinals_follow_declaration_order() {
        let result = split(&body_of(
            "CREATE TABLE T (A INT CHECK (A > 0), B INT CHECK (B < 10));",
        ));
        let raws: Vec<&str> = result.clauses.iter().map(|c| c.raw.as_str()).collect();
        assert_eq!(raws, vec!["A > 0", "B < 10"]);
        assert_eq!(result.clauses[1].ordinal, 1);
    }

    #[test]
    fn test_non_check_constraints_pass_through() {
        let result = split(&body_of(
            "CREATE TABLE T (ID INT, NAME TEXT, PRIMARY KEY (ID), UNIQUE (NAME));",
        ));
        assert!(result.clauses.is_empty());
        assert_eq!(result.body, "(ID INT, NAME TEXT, PRIMARY KEY (ID), UNIQUE (NAME))");
    }

    #[test]
    fn test_stripped_body_round_trips_unchanged() {
        let first = split(&body_of("CREATE TABLE T (A INT CHECK (A > 0), B INT);"));
        assert_eq!(first.body, "(A INT, B INT)");

        let again = split(&body_of(&format!("CREATE TABLE T {};", first.body)));
        assert!(again.clauses.is_empty());
        assert_eq!(again.body, first.body);
    }

    #[test]
    fn test_quoted_string_inside_clause_is_captured() {
        let result = split(&body_of(
            "CREATE TABLE T (STATUS TEXT CHECK (STATUS != 'closed'));",
        ));
        assert_eq!(result.clauses[0].raw, "STATUS <> 'closed'");
    }
}
