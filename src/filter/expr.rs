//! Typed WHERE expressions. Literals are always bound as parameters;
//! column names are validated before quoting.

use serde_json::Value;

use super::error::FilterError;
use super::filter_fields::{quote_field, validate_column};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
}

impl CmpOp {
    pub fn to_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "<>",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    Cmp { column: String, op: CmpOp, value: Value },
    IsNull(String),
    IsNotNull(String),
    In { column: String, values: Vec<Value> },
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn cmp(column: impl Into<String>, op: CmpOp, value: impl Into<Value>) -> Self {
        Expr::Cmp { column: column.into(), op, value: value.into() }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Eq, value)
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Ne, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Lt, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Lte, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Gt, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(column, CmpOp::Gte, value)
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::cmp(column, CmpOp::Like, Value::String(pattern.into()))
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Expr::IsNull(column.into())
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Expr::IsNotNull(column.into())
    }

    pub fn in_values<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Expr::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut parts) => {
                parts.push(other);
                Expr::And(parts)
            }
            first => Expr::And(vec![first, other]),
        }
    }

    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut parts) => {
                parts.push(other);
                Expr::Or(parts)
            }
            first => Expr::Or(vec![first, other]),
        }
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Render to `?`-placeholder SQL plus the bound parameter values.
    pub fn to_sql(&self) -> Result<(String, Vec<Value>), FilterError> {
        let mut params = vec![];
        let sql = self.render(&mut params)?;
        Ok((sql, params))
    }

    fn render(&self, params: &mut Vec<Value>) -> Result<String, FilterError> {
        match self {
            Expr::Cmp { column, op, value } => {
                validate_column(column)?;
                // Null comparisons become IS [NOT] NULL; binding NULL to
                // an equality placeholder never matches in SQL
                if value.is_null() {
                    return match op {
                        CmpOp::Eq => Ok(format!("{} IS NULL", quote_field(column))),
                        CmpOp::Ne => Ok(format!("{} IS NOT NULL", quote_field(column))),
                        _ => Err(FilterError::InvalidOperatorData(format!(
                            "Operator {} cannot compare against null",
                            op.to_sql()
                        ))),
                    };
                }
                params.push(value.clone());
                Ok(format!("{} {} ?", quote_field(column), op.to_sql()))
            }
            Expr::IsNull(column) => {
                validate_column(column)?;
                Ok(format!("{} IS NULL", quote_field(column)))
            }
            Expr::IsNotNull(column) => {
                validate_column(column)?;
                Ok(format!("{} IS NOT NULL", quote_field(column)))
            }
            Expr::In { column, values } => {
                validate_column(column)?;
                if values.is_empty() {
                    // Empty IN list matches nothing
                    return Ok("1=0".to_string());
                }
                let placeholders: Vec<&str> = values.iter().map(|_| "?").collect();
                params.extend(values.iter().cloned());
                Ok(format!("{} IN ({})", quote_field(column), placeholders.join(", ")))
            }
            Expr::And(parts) => Self::render_group(parts, " AND ", params),
            Expr::Or(parts) => Self::render_group(parts, " OR ", params),
            Expr::Not(inner) => {
                let sql = inner.render(params)?;
                Ok(format!("NOT ({})", sql))
            }
        }
    }

    fn render_group(parts: &[Expr], joiner: &str, params: &mut Vec<Value>) -> Result<String, FilterError> {
        if parts.is_empty() {
            return Err(FilterError::InvalidOperatorData(
                "Boolean group requires at least one expression".to_string(),
            ));
        }
        let mut rendered = Vec::with_capacity(parts.len());
        for part in parts {
            rendered.push(format!("({})", part.render(params)?));
        }
        Ok(rendered.join(joiner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comparison_binds_literal() {
        let (sql, params) = Expr::gte("age", 18).to_sql().unwrap();
        assert_eq!(sql, "`age` >= ?");
        assert_eq!(params, vec![json!(18)]);
    }

    #[test]
    fn null_equality_becomes_is_null() {
        let (sql, params) = Expr::eq("deleted_at", Value::Null).to_sql().unwrap();
        assert_eq!(sql, "`deleted_at` IS NULL");
        assert!(params.is_empty());

        let (sql, _) = Expr::ne("deleted_at", Value::Null).to_sql().unwrap();
        assert_eq!(sql, "`deleted_at` IS NOT NULL");
    }

    #[test]
    fn null_range_comparison_is_rejected() {
        assert!(Expr::gt("age", Value::Null).to_sql().is_err());
    }

    #[test]
    fn and_or_group_with_parens() {
        let expr = Expr::eq("status", "active")
            .and(Expr::gt("age", 21))
            .or(Expr::eq("role", "admin"));
        let (sql, params) = expr.to_sql().unwrap();
        assert_eq!(
            sql,
            "((`status` = ?) AND (`age` > ?)) OR (`role` = ?)"
        );
        assert_eq!(params, vec![json!("active"), json!(21), json!("admin")]);
    }

    #[test]
    fn in_list_expands_placeholders() {
        let (sql, params) = Expr::in_values("id", [1, 2, 3]).to_sql().unwrap();
        assert_eq!(sql, "`id` IN (?, ?, ?)");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn empty_in_list_matches_nothing() {
        let (sql, params) = Expr::in_values("id", Vec::<i64>::new()).to_sql().unwrap();
        assert_eq!(sql, "1=0");
        assert!(params.is_empty());
    }

    #[test]
    fn not_wraps_inner_expression() {
        let (sql, _) = Expr::eq("name", "a").not().to_sql().unwrap();
        assert_eq!(sql, "NOT (`name` = ?)");
    }

    #[test]
    fn hostile_column_names_are_rejected() {
        assert!(Expr::eq("name`; --", "x").to_sql().is_err());
    }
}
