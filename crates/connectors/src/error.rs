use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("EXPLAIN ANALYZE output did not include an execution time row")]
    MissingExecutionTime,

    #[error("Could not parse an execution time from plan row `{0}`")]
    InvalidTimingRow(String),
}
