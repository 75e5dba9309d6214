use crate::error::CliError;
use connectors::{Comparison, Variant};

pub fn print_table(comparison: &Comparison) {
    println!("Insert cost comparison:");
    println!("-----------------------------");
    println!("{:<24} {:.3} ms", "CHECK constraints", comparison.check_ms);
    println!("{:<24} {:.3} ms", "Triggers", comparison.trigger_ms);
    let winner = match comparison.winner {
        Variant::CheckConstraints => "check constraints",
        Variant::Triggers => "triggers",
    };
    println!("Insertion with {winner} is faster for your data!");
}

pub fn print_json(comparison: &Comparison) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(comparison)?;
    println!("{json}");
    Ok(())
}

pub async fn write_report(comparison: &Comparison, path: String) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(comparison)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
