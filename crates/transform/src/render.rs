//! Renders the synthesized statements into SQL text. All output formatting
//! lives here; the parsing side never builds statement text itself.

use crate::ast::{Clause, CreateTable, CreateTrigger, DropTable, Operand, Term, TriggerFunction};

pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { sql: String::new() }
    }

    pub fn finish(self) -> String {
        self.sql
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Render {
    fn render(&self, r: &mut Renderer);
}

/// Renders a single node into a fresh buffer.
pub fn to_sql<T: Render>(node: &T) -> String {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}

impl Render for Operand {
    fn render(&self, r: &mut Renderer) {
        match self {
            Operand::ColumnRef(name) => {
                r.sql.push_str("NEW.");
                r.sql.push_str(name);
            }
            Operand::Literal(text) => r.sql.push_str(text),
        }
    }
}

impl Render for Term {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);
        r.sql.push(' ');
        r.sql.push_str(&self.op.to_string());
        r.sql.push(' ');
        self.right.render(r);
    }
}

impl Render for Clause {
    fn render(&self, r: &mut Renderer) {
        // a multi-term clause keeps its own grouping against the outer AND
        if self.rest.is_empty() {
            self.first.render(r);
            return;
        }
        r.sql.push('(');
        self.first.render(r);
        for (connective, term) in &self.rest {
            r.sql.push(' ');
            r.sql.push_str(&connective.to_string());
            r.sql.push(' ');
            term.render(r);
        }
        r.sql.push(')');
    }
}

impl Render for TriggerFunction {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE OR REPLACE FUNCTION ");
        r.sql.push_str(&self.name);
        r.sql.push_str("()\n");
        r.sql.push_str("  RETURNS TRIGGER\n");
        r.sql.push_str("  LANGUAGE PLPGSQL\n");
        r.sql.push_str("  AS\n");
        r.sql.push_str("  $$\n");
        r.sql.push_str("  BEGIN\n");
        r.sql.push_str("    IF ");
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(" AND ");
            }
            clause.render(r);
        }
        r.sql.push_str(" THEN\n");
        r.sql.push_str("      RETURN NEW;\n");
        r.sql.push_str("    ELSE\n");
        r.sql.push_str("      RETURN NULL;\n");
        r.sql.push_str("    END IF;\n");
        r.sql.push_str("  END;\n");
        r.sql.push_str("  $$;");
    }
}

impl Render for CreateTrigger {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TRIGGER ");
        r.sql.push_str(&self.name);
        r.sql.push('\n');
        r.sql.push_str("BEFORE INSERT ON ");
        r.sql.push_str(&self.table);
        r.sql.push('\n');
        r.sql.push_str("  FOR EACH ROW EXECUTE FUNCTION ");
        r.sql.push_str(&self.function);
        r.sql.push_str("();");
    }
}

impl Render for DropTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("DROP TABLE IF EXISTS ");
        r.sql.push_str(&self.table);
        r.sql.push(';');
    }
}

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        r.sql.push_str(&self.table);
        if !self.body.is_empty() {
            r.sql.push('\n');
            r.sql.push_str(&self.body);
        }
        r.sql.push(';');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CompareOp, Connective};

    fn col(name: &str) -> Operand {
        Operand::ColumnRef(name.to_string())
    }

    fn lit(text: &str) -> Operand {
        Operand::Literal(text.to_string())
    }

    #[test]
    fn test_render_trigger_function() {
        let function = TriggerFunction {
            name: "T_check_function".to_string(),
            clauses: vec![Clause {
                first: Term {
                    left: col("A"),
                    op: CompareOp::Gt,
                    right: lit("0"),
                },
                rest: vec![],
            }],
        };

        let expected = "CREATE OR REPLACE FUNCTION T_check_function()
  RETURNS TRIGGER
  LANGUAGE PLPGSQL
  AS
  $$
  BEGIN
    IF NEW.A > 0 THEN
      RETURN NEW;
    ELSE
      RETURN NULL;
    END IF;
  END;
  $$;";
        assert_eq!(to_sql(&function), expected);
    }

    #[test]
    fn test_multi_term_clause_is_parenthesized_against_outer_and() {
        let compound = Clause {
            first: Term {
                left: col("A"),
                op: CompareOp::Gt,
                right: lit("0"),
            },
            rest: vec![(
                Connective::And,
                Term {
                    left: col("B"),
                    op: CompareOp::Lt,
                    right: col("A"),
                },
            )],
        };
        let simple = Clause {
            first: Term {
                left: col("C"),
                op: CompareOp::Eq,
                right: lit("1"),
            },
            rest: vec![],
        };

        let function = TriggerFunction {
            name: "T_check_function".to_string(),
            clauses: vec![compound, simple],
        };
        let sql = to_sql(&function);
        assert!(sql.contains("IF (NEW.A > 0 AND NEW.B < NEW.A) AND NEW.C = 1 THEN"));
    }

    #[test]
    fn test_render_create_trigger() {
        let trigger = CreateTrigger {
            name: "T_0_check_trigger".to_string(),
            table: "T".to_string(),
            function: "T_0_check_function".to_string(),
        };

        let expected = "CREATE TRIGGER T_0_check_trigger
BEFORE INSERT ON T
  FOR EACH ROW EXECUTE FUNCTION T_0_check_function();";
        assert_eq!(to_sql(&trigger), expected);
    }

    #[test]
    fn test_render_drop_and_create() {
        let drop = DropTable {
            table: "T".to_string(),
        };
        assert_eq!(to_sql(&drop), "DROP TABLE IF EXISTS T;");

        let create = CreateTable {
            table: "T".to_string(),
            body: "(ID INT)".to_string(),
        };
        assert_eq!(to_sql(&create), "CREATE TABLE T\n(ID INT);");
    }
}
