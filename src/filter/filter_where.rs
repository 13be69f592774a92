//! WHERE sub-clause builders: the legacy token-stream form kept for
//! existing callers, and the typed expression form for new code.

use super::error::FilterError;
use super::expr::Expr;
use super::types::SqlResult;

/// Tokens the legacy builder recognizes as SQL syntax. Anything else is
/// passed through verbatim as a pre-quoted field or value fragment.
const KEYWORD_TOKENS: &[&str] = &[
    ")", "(", "and", "or", "<", "<=", "=", ">", ">=", "is", "null", "not",
];

#[derive(Debug, Clone)]
pub enum WhereClause {
    /// Ordered token stream concatenated without binding or escaping.
    ///
    /// Trust boundary: the caller must pre-sanitize every literal it
    /// passes in the verbatim branch. New code should use `Expr`.
    Tokens(Vec<String>),
    /// Typed expression tree; every literal is bound as a parameter.
    Expr(Expr),
}

impl WhereClause {
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WhereClause::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    pub fn expr(expr: Expr) -> Self {
        WhereClause::Expr(expr)
    }

    /// Render the full `WHERE ...` sub-clause. Empty token input yields
    /// an empty clause (no WHERE at all).
    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        match self {
            WhereClause::Tokens(tokens) => Ok(SqlResult {
                query: build_from_tokens(tokens),
                params: vec![],
            }),
            WhereClause::Expr(expr) => {
                let (sql, params) = expr.to_sql()?;
                Ok(SqlResult { query: format!("WHERE {}", sql), params })
            }
        }
    }
}

/// Recognized tokens are upper-cased, everything else passes through
/// verbatim; each token is surrounded by exactly one space.
fn build_from_tokens(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let mut where_clause = String::from("WHERE ");
    for token in tokens {
        let lowered = token.to_lowercase();
        where_clause.push(' ');
        if KEYWORD_TOKENS.contains(&lowered.as_str()) {
            where_clause.push_str(&lowered.to_uppercase());
        } else {
            where_clause.push_str(token);
        }
        where_clause.push(' ');
    }
    where_clause
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tokens_yield_no_clause() {
        let sql = WhereClause::tokens(Vec::<String>::new()).to_sql().unwrap();
        assert_eq!(sql.query, "");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn recognized_tokens_are_uppercased() {
        let sql = WhereClause::tokens(["(", "age", ">=", "'18'", ")", "and", "deleted", "is", "null"])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql.query,
            "WHERE  (  age  >=  '18'  )  AND  deleted  IS  NULL "
        );
    }

    #[test]
    fn unrecognized_tokens_keep_their_casing() {
        let sql = WhereClause::tokens(["Name", "=", "'Ann'"]).to_sql().unwrap();
        assert_eq!(sql.query, "WHERE  Name  =  'Ann' ");
    }

    #[test]
    fn mixed_case_keywords_still_match() {
        let sql = WhereClause::tokens(["a", "AnD", "b", "Or", "c"]).to_sql().unwrap();
        assert_eq!(sql.query, "WHERE  a  AND  b  OR  c ");
    }

    #[test]
    fn expr_clause_binds_parameters() {
        let sql = WhereClause::expr(Expr::eq("name", "a")).to_sql().unwrap();
        assert_eq!(sql.query, "WHERE `name` = ?");
        assert_eq!(sql.params, vec![json!("a")]);
    }
}
