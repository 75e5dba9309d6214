use connectors::ConnectorError;
use thiserror::Error;
use transform::TransformError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a SQL file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to transform the DDL: {0}")]
    Transform(#[from] TransformError),

    #[error("Performance comparison failed: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Failed to serialize the report to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Input and output path cannot be the same")]
    PathCollision,
}
