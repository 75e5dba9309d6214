//! Rewrites `CREATE TABLE` statements carrying inline `CHECK` constraints
//! into a constraint-free table plus `BEFORE INSERT` trigger functions with
//! the same pass/fail logic.
//!
//! A row that violates a synthesized trigger is silently dropped
//! (`RETURN NULL`), not rejected with an error. That deviates from native
//! `CHECK` semantics on purpose: it is the behavior of the system whose
//! insert cost this tool measures.

pub mod ast;
pub mod columns;
pub mod condition;
pub mod error;
pub mod lexer;
pub mod render;
pub mod splitter;
pub mod statement;

mod assemble;

pub use assemble::{transform_script, transform_table};
pub use ast::SynthesisMode;
pub use error::TransformError;
