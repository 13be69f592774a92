//! Ordering and pagination sub-clause builders.

use super::types::SortDirection;

/// ORDER BY sub-clause over one or more columns, all sharing one direction.
pub fn order_by_clause(fields: &[String], direction: SortDirection) -> String {
    if fields.is_empty() {
        return String::new();
    }
    format!("ORDER BY `{}` {}", fields.join("`, `"), direction.to_sql())
}

/// LIMIT sub-clause in MySQL `LIMIT offset, limit` form.
///
/// Emitted only for a positive limit; an unset offset renders as 0.
pub fn limit_clause(offset: Option<i64>, limit: Option<i64>) -> String {
    match limit {
        Some(l) if l > 0 => format!("LIMIT {}, {}", offset.unwrap_or(0), l),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_joins_columns_with_single_direction() {
        let cols = vec!["created_at".to_string(), "name".to_string()];
        assert_eq!(
            order_by_clause(&cols, SortDirection::Desc),
            "ORDER BY `created_at`, `name` DESC"
        );
        assert_eq!(order_by_clause(&[], SortDirection::Asc), "");
    }

    #[test]
    fn limit_uses_offset_comma_limit_form() {
        assert_eq!(limit_clause(Some(10), Some(5)), "LIMIT 10, 5");
        assert_eq!(limit_clause(None, Some(5)), "LIMIT 0, 5");
    }

    #[test]
    fn limit_absent_for_zero_negative_or_unset() {
        assert_eq!(limit_clause(Some(10), Some(0)), "");
        assert_eq!(limit_clause(Some(10), Some(-3)), "");
        assert_eq!(limit_clause(Some(10), None), "");
    }
}
