use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::PgExplainProbe;
use tracing::{Level, info};
use transform::{SynthesisMode, transform_script};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "checktrig",
    version = "0.1.0",
    about = "Converts CHECK constraints in SQL DDL into BEFORE INSERT triggers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform {
            input,
            output,
            split,
        } => {
            if input == output {
                return Err(CliError::PathCollision);
            }

            let sql = tokio::fs::read_to_string(&input).await?;
            let mode = if split {
                SynthesisMode::Split
            } else {
                SynthesisMode::Combined
            };
            let rewritten = transform_script(&sql, mode)?;
            tokio::fs::write(&output, rewritten).await?;

            info!("Wrote transformed DDL to {output}");
        }
        Commands::Analyze {
            check_ddl,
            trigger_ddl,
            dml,
            db_host,
            db_name,
            db_user,
            db_password,
            json,
            output,
        } => {
            let conn_str = format!(
                "host={db_host} dbname={db_name} user={db_user} password={db_password}"
            );
            let probe = PgExplainProbe::new(conn_str);

            let check_sql = tokio::fs::read_to_string(&check_ddl).await?;
            let trigger_sql = tokio::fs::read_to_string(&trigger_ddl).await?;
            let dml_sql = tokio::fs::read_to_string(&dml).await?;

            let comparison =
                connectors::compare(&probe, &check_sql, &trigger_sql, &dml_sql).await?;

            match output {
                Some(path) => output::write_report(&comparison, path).await?,
                None if json => output::print_json(&comparison)?,
                None => output::print_table(&comparison),
            }
        }
    }

    Ok(())
}
