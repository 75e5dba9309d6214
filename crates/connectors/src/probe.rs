//! Insert-cost measurement against a live PostgreSQL server.
//!
//! Each measurement applies one DDL variant, then runs the DML under
//! `EXPLAIN ANALYZE` inside a transaction that is rolled back, so repeated
//! measurements against the same tables start from identical state. Only the
//! reported execution time survives the rollback.

use crate::error::ConnectorError;
use async_trait::async_trait;
use serde::Serialize;
use tokio_postgres::{Client, NoTls};
use tracing::{error, info};

/// Measures the server-reported execution time of `dml` after `ddl` has been
/// applied, in milliseconds.
#[async_trait]
pub trait PerformanceProbe {
    async fn measure(&self, ddl: &str, dml: &str) -> Result<f64, ConnectorError>;
}

/// `PerformanceProbe` backed by `EXPLAIN ANALYZE` on a Postgres connection.
pub struct PgExplainProbe {
    conn_str: String,
}

impl PgExplainProbe {
    pub fn new(conn_str: impl Into<String>) -> Self {
        PgExplainProbe {
            conn_str: conn_str.into(),
        }
    }

    async fn connect(&self) -> Result<Client, ConnectorError> {
        let (client, connection) = tokio_postgres::connect(&self.conn_str, NoTls).await?;

        // drive the connection until the client is dropped
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!(%err, "Postgres connection error");
            }
        });

        Ok(client)
    }
}

#[async_trait]
impl PerformanceProbe for PgExplainProbe {
    async fn measure(&self, ddl: &str, dml: &str) -> Result<f64, ConnectorError> {
        let mut client = self.connect().await?;
        client.batch_execute(ddl).await?;

        let explain = format!("EXPLAIN ANALYZE {dml}");
        let tx = client.transaction().await?;
        let rows = tx.query(explain.as_str(), &[]).await?;
        tx.rollback().await?;

        let last = rows
            .last()
            .ok_or(ConnectorError::MissingExecutionTime)?
            .get::<_, String>(0);
        parse_execution_time(&last)
    }
}

/// Which DDL variant won the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    CheckConstraints,
    Triggers,
}

/// Result of one comparison run, serializable for report output.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub check_ms: f64,
    pub trigger_ms: f64,
    pub winner: Variant,
}

/// Runs the DML against both DDL variants and reports the faster one.
/// Ties go to the check-constraint variant.
pub async fn compare(
    probe: &impl PerformanceProbe,
    check_ddl: &str,
    trigger_ddl: &str,
    dml: &str,
) -> Result<Comparison, ConnectorError> {
    let check_ms = probe.measure(check_ddl, dml).await?;
    info!("Insert execution time with CHECK constraints: {check_ms} ms");

    let trigger_ms = probe.measure(trigger_ddl, dml).await?;
    info!("Insert execution time with triggers: {trigger_ms} ms");

    let winner = if trigger_ms < check_ms {
        Variant::Triggers
    } else {
        Variant::CheckConstraints
    };

    Ok(Comparison {
        check_ms,
        trigger_ms,
        winner,
    })
}

/// Extracts the millisecond figure from the plan's final
/// `Execution Time: <n> ms` row.
pub fn parse_execution_time(row: &str) -> Result<f64, ConnectorError> {
    let trimmed = row.trim();
    if !trimmed.starts_with("Execution Time") {
        return Err(ConnectorError::MissingExecutionTime);
    }
    trimmed
        .split(':')
        .nth(1)
        .and_then(|rest| rest.trim().split(' ').next())
        .and_then(|figure| figure.parse::<f64>().ok())
        .ok_or_else(|| ConnectorError::InvalidTimingRow(row.to_string()))
}
