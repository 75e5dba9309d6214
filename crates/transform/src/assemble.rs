//! Drives the per-table pipeline and assembles the output script:
//! `DROP TABLE IF EXISTS`, the checks-free `CREATE TABLE`, then the
//! synthesized function/trigger statements, tables in input order.

use crate::ast::{Clause, CreateTable, CreateTrigger, DropTable, SynthesisMode, TriggerFunction};
use crate::error::TransformError;
use crate::render::to_sql;
use crate::splitter::SplitBody;
use crate::statement::TableStatement;
use crate::{columns, condition, lexer, splitter, statement};
use tracing::debug;

/// Rewrites every `CREATE TABLE` in `sql`; all other statements are passed
/// over and not emitted.
pub fn transform_script(sql: &str, mode: SynthesisMode) -> Result<String, TransformError> {
    let tokens = lexer::tokenize(sql)?;
    let mut scripts = Vec::new();
    for stmt in statement::split_statements(&tokens) {
        let Some(table) = statement::parse_table_statement(&stmt) else {
            continue;
        };
        scripts.push(transform_table(&table, mode)?);
    }
    if scripts.is_empty() {
        return Ok(String::new());
    }
    let mut out = scripts.join("\n\n");
    out.push('\n');
    Ok(out)
}

/// Transforms a single parsed `CREATE TABLE` statement. Pure function of the
/// statement tokens; independent across tables.
pub fn transform_table(
    table: &TableStatement,
    mode: SynthesisMode,
) -> Result<String, TransformError> {
    let columns = columns::extract(&table.body);
    let SplitBody { clauses, body } = splitter::split(&table.body);

    let mut parsed: Vec<Clause> = Vec::with_capacity(clauses.len());
    for check in &clauses {
        let clause = condition::parse_clause(&check.raw, &columns).map_err(|err| {
            TransformError::UnsupportedClauseShape {
                table: table.name.ident.clone(),
                ordinal: check.ordinal,
                clause: check.raw.clone(),
                reason: err.to_string(),
            }
        })?;
        parsed.push(clause);
    }

    debug!(
        table = %table.name.ident,
        clauses = parsed.len(),
        "synthesizing triggers"
    );

    let mut parts: Vec<String> = Vec::new();
    parts.push(to_sql(&DropTable {
        table: table.name.text.clone(),
    }));
    parts.push(to_sql(&CreateTable {
        table: table.name.text.clone(),
        body,
    }));

    match mode {
        SynthesisMode::Combined => {
            if !parsed.is_empty() {
                let function = function_name(&table.name.ident, None);
                parts.push(to_sql(&TriggerFunction {
                    name: function.clone(),
                    clauses: parsed,
                }));
                parts.push(to_sql(&CreateTrigger {
                    name: trigger_name(&table.name.ident, None),
                    table: table.name.text.clone(),
                    function,
                }));
            }
        }
        SynthesisMode::Split => {
            for (clause, check) in parsed.into_iter().zip(&clauses) {
                let function = function_name(&table.name.ident, Some(check.ordinal));
                parts.push(to_sql(&TriggerFunction {
                    name: function.clone(),
                    clauses: vec![clause],
                }));
                parts.push(to_sql(&CreateTrigger {
                    name: trigger_name(&table.name.ident, Some(check.ordinal)),
                    table: table.name.text.clone(),
                    function,
                }));
            }
        }
    }

    Ok(parts.join("\n\n"))
}

fn function_name(table: &str, ordinal: Option<usize>) -> String {
    match ordinal {
        Some(i) => format!("{table}_{i}_check_function"),
        None => format!("{table}_check_function"),
    }
}

fn trigger_name(table: &str, ordinal: Option<usize>) -> String {
    match ordinal {
        Some(i) => format!("{table}_{i}_check_trigger"),
        None => format!("{table}_check_trigger"),
    }
}
