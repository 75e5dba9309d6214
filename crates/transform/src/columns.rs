//! Column name extraction from a table body.
//!
//! Yields the first word of every top-level comma-separated definition, in
//! declaration order, quote-stripped. The list is only consulted to decide
//! whether a condition operand references a column, so non-column leading
//! words (`PRIMARY`, `CONSTRAINT`, …) are kept as the source wrote them.

use sqlparser::tokenizer::Token;

/// Extracts declared column names from the body tokens of one table.
/// A body without a parenthesized list yields an empty set.
pub fn extract(body: &[Token]) -> Vec<String> {
    let Some(interior) = parenthesized_interior(body) else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for segment in split_top_level(interior) {
        let Some(first) = segment
            .iter()
            .find(|t| !matches!(t, Token::Whitespace(_)))
        else {
            continue;
        };
        let name = match first {
            Token::Word(word) => word.value.clone(),
            other => other.to_string(),
        };
        names.push(name);
    }
    names
}

/// Tokens between the first `(` and the last `)`, or `None` without both.
pub(crate) fn parenthesized_interior(body: &[Token]) -> Option<&[Token]> {
    let open = body.iter().position(|t| matches!(t, Token::LParen))?;
    let close = body.iter().rposition(|t| matches!(t, Token::RParen))?;
    if close <= open {
        return None;
    }
    Some(&body[open + 1..close])
}

/// Splits on commas at parenthesis depth zero, so a type argument list like
/// `NUMERIC(10,2)` stays inside its definition.
pub(crate) fn split_top_level(tokens: &[Token]) -> Vec<&[Token]> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Comma if depth == 0 => {
                segments.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&tokens[start..]);
    segments
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
    fn test_order_preserving_and_quote_stripping() {
        let body = body_of(r#"CREATE TABLE T (id INT, "Name" TEXT);"#);
        assert_eq!(extract(&body), vec!["ID", "Name"]);
    }

    #[test]
    fn test_type_argument_commas_do_not_split() {
        let body = body_of("CREATE TABLE T (ID INT, PRICE NUMERIC(10,2));");
        assert_eq!(extract(&body), vec!["ID", "PRICE"]);
    }

    #[test]
    fn test_table_constraint_first_words_are_kept() {
        let body = body_of("CREATE TABLE T (ID INT, PRIMARY KEY (ID));");
        assert_eq!(extract(&body), vec!["ID", "PRIMARY"]);
    }

    #[test]
    fn test_missing_column_list_yields_empty_set() {
        let body = body_of("CREATE TABLE T;");
        assert!(extract(&body).is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let body = body_of("CREATE TABLE T (A INT, A INT);");
        assert_eq!(extract(&body), vec!["A", "A"]);
    }
}
