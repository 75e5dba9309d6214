//! Facade over the external SQL tokenizer.
//!
//! Raw input is tokenized with the PostgreSQL dialect and then rewritten into
//! the canonical form the rest of the engine assumes: unquoted words
//! uppercased, whitespace runs (including comments) collapsed to single
//! spaces, comparison operators separated from their operands. Quoted
//! identifiers keep their case.

use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer, TokenizerError, Whitespace, Word};

/// Tokenizes `sql` and canonicalizes the resulting stream.
pub fn tokenize(sql: &str) -> Result<Vec<Token>, TokenizerError> {
    let dialect = PostgreSqlDialect {};
    let tokens = Tokenizer::new(&dialect, sql).tokenize()?;
    Ok(canonicalize(tokens))
}

/// Renders a token slice back into SQL text, preserving token adjacency.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}

fn canonicalize(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::EOF => {}
            Token::Whitespace(_) => push_space(&mut out),
            Token::Word(word) if word.quote_style.is_none() => {
                out.push(Token::Word(Word {
                    value: word.value.to_uppercase(),
                    quote_style: None,
                    keyword: word.keyword,
                }));
            }
            other => {
                let spaced = is_comparison(&other);
                if spaced {
                    push_space(&mut out);
                }
                out.push(other);
                if spaced {
                    out.push(Token::Whitespace(Whitespace::Space));
                }
            }
        }
    }
    while matches!(out.last(), Some(Token::Whitespace(_))) {
        out.pop();
    }
    out
}

fn push_space(out: &mut Vec<Token>) {
    match out.last() {
        None | Some(Token::Whitespace(_)) => {}
        Some(_) => out.push(Token::Whitespace(Whitespace::Space)),
    }
}

// Comparison operators must be standalone whitespace-delimited tokens for the
// condition grammar; arithmetic signs are left attached so that negative
// literals survive as one operand.
fn is_comparison(token: &Token) -> bool {
    matches!(
        token,
        Token::Eq
            | Token::DoubleEq
            | Token::Neq
            | Token::Lt
            | Token::Gt
            | Token::LtEq
            | Token::GtEq
    )
}
