//! Statement splitting and `CREATE TABLE` recognition over the canonical
//! token stream. Anything that is not a `CREATE TABLE` is passed over.

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, Word};

/// A table identifier in both its rendered and bare forms.
///
/// `text` preserves quoting for use in emitted statements; `ident` is the
/// unquoted value used to derive function and trigger names.
#[derive(Debug, Clone, PartialEq)]
pub struct TableName {
    pub text: String,
    pub ident: String,
}

/// One `CREATE TABLE` statement: the table name and every token after it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStatement {
    pub name: TableName,
    pub body: Vec<Token>,
}

/// Splits a token stream into statements on `;`. Statements with no
/// substantive tokens are dropped.
pub fn split_statements(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut statements = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    for token in tokens {
        if matches!(token, Token::SemiColon) {
            if current.iter().any(is_substantive) {
                statements.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(token.clone());
        }
    }
    if current.iter().any(is_substantive) {
        statements.push(current);
    }
    statements
}

/// Recognizes `CREATE TABLE <name> …`, returning `None` for any other
/// statement shape.
pub fn parse_table_statement(stmt: &[Token]) -> Option<TableStatement> {
    let mut words = stmt
        .iter()
        .enumerate()
        .filter(|(_, t)| !matches!(t, Token::Whitespace(_)));

    let (_, create) = words.next()?;
    if !is_keyword(create, Keyword::CREATE) {
        return None;
    }
    let (_, table) = words.next()?;
    if !is_keyword(table, Keyword::TABLE) {
        return None;
    }
    let (name_idx, name) = words.next()?;
    let Token::Word(word) = name else {
        return None;
    };

    Some(TableStatement {
        name: TableName {
            text: name.to_string(),
            ident: word.value.clone(),
        },
        body: stmt[name_idx + 1..].to_vec(),
    })
}

fn is_substantive(token: &Token) -> bool {
    !matches!(token, Token::Whitespace(_))
}

fn is_keyword(token: &Token, keyword: Keyword) -> bool {
    matches!(token, Token::Word(Word { keyword: k, quote_style: None, .. }) if *k == keyword)
}
