use sqlparser::tokenizer::TokenizerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Failed to tokenize SQL input: {0}")]
    Tokenize(#[from] TokenizerError),

    #[error(
        "Unsupported CHECK clause shape in table {table}, clause {ordinal} (`{clause}`): {reason}"
    )]
    UnsupportedClauseShape {
        table: String,
        ordinal: usize,
        clause: String,
        reason: String,
    },
}
