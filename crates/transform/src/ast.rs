//! AST for parsed CHECK conditions and the synthesized trigger statements.

use std::fmt;

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// References a declared column; rendered with a `NEW.` prefix.
    ColumnRef(String),
    /// Anything else; rendered verbatim.
    Literal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl CompareOp {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "=" | "==" => Some(CompareOp::Eq),
            "!=" | "<>" => Some(CompareOp::NotEq),
            "<" => Some(CompareOp::Lt),
            ">" => Some(CompareOp::Gt),
            "<=" => Some(CompareOp::LtEq),
            ">=" => Some(CompareOp::GtEq),
            _ => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "="),
            CompareOp::NotEq => write!(f, "<>"),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::LtEq => write!(f, "<="),
            CompareOp::GtEq => write!(f, ">="),
        }
    }
}

/// Logical connective between two comparison terms inside one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}

/// `Term := Operand Operator Operand`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub left: Operand,
    pub op: CompareOp,
    pub right: Operand,
}

/// `Clause := Term (Connective Term)*`
///
/// One parsed CHECK clause. Connectives are kept with the term they attach,
/// preserving the source order of the boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub first: Term,
    pub rest: Vec<(Connective, Term)>,
}

impl Clause {
    pub fn term_count(&self) -> usize {
        1 + self.rest.len()
    }
}

/// A synthesized PL/pgSQL trigger function validating one or more clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerFunction {
    pub name: String,
    pub clauses: Vec<Clause>,
}

/// A `BEFORE INSERT` trigger wired to a synthesized function.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrigger {
    pub name: String,
    pub table: String,
    pub function: String,
}

/// `DROP TABLE IF EXISTS <table>;`
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub table: String,
}

/// The checks-free `CREATE TABLE`, body text preserved from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: String,
    pub body: String,
}

/// How clauses are distributed over trigger functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisMode {
    /// One function per table; all clauses conjoined.
    Combined,
    /// One function/trigger pair per original clause.
    Split,
}
