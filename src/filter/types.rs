use serde::{Deserialize, Serialize};

use super::filter_where::WhereClause;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Validates against the fixed {ASC, DESC} set, case-insensitively.
    /// Any other input falls back to ASC.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// One advanced-select request: projection, filtering, grouping,
/// ordering and pagination in a single value.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    /// Column names to project; empty or containing "*" selects all.
    pub fields: Vec<String>,
    pub filters: Option<WhereClause>,
    pub group_by: Vec<String>,
    pub order_by: Vec<String>,
    pub direction: SortDirection,
    pub offset: Option<i64>,
    /// LIMIT is emitted only when set and positive.
    pub limit: Option<i64>,
}

impl SelectQuery {
    pub fn with_filters(filters: WhereClause) -> Self {
        Self { filters: Some(filters), ..Default::default() }
    }
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<serde_json::Value>,
}

impl SqlResult {
    pub fn empty() -> Self {
        Self { query: String::new(), params: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_known_values() {
        assert_eq!(SortDirection::parse("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::parse("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("DeSc"), SortDirection::Desc);
    }

    #[test]
    fn direction_falls_back_to_asc() {
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Asc);
        assert_eq!(SortDirection::parse(""), SortDirection::Asc);
    }
}
