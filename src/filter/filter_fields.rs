//! Projection and grouping sub-clause builders.

use super::error::FilterError;

/// Back-tick quote a field name unless the caller already quoted it.
pub fn quote_field(name: &str) -> String {
    if name.contains('`') {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}

/// Reject column names that could escape a quoted identifier.
pub fn validate_column(column: &str) -> Result<(), FilterError> {
    if column.is_empty() {
        return Err(FilterError::InvalidColumn("Column name cannot be empty".to_string()));
    }
    let mut chars = column.chars();
    let first = chars.next().unwrap();
    if !column.chars().all(|c| c.is_alphanumeric() || c == '_') || (!first.is_alphabetic() && first != '_') {
        return Err(FilterError::InvalidColumn(format!("Invalid column name format: {}", column)));
    }
    Ok(())
}

/// SELECT list: empty input or a "*" entry selects every column.
pub fn fields_clause(fields: &[String]) -> String {
    if fields.is_empty() || fields.iter().any(|f| f == "*") {
        return "*".to_string();
    }
    fields.iter().map(|f| quote_field(f)).collect::<Vec<_>>().join(",")
}

/// GROUP BY sub-clause; empty input yields no clause at all.
pub fn group_by_clause(fields: &[String]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
    format!("GROUP BY {}", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn star_and_empty_select_everything() {
        assert_eq!(fields_clause(&[]), "*");
        assert_eq!(fields_clause(&names(&["*"])), "*");
    }

    #[test]
    fn fields_are_quoted_once() {
        assert_eq!(fields_clause(&names(&["id", "name"])), "`id`,`name`");
        // Already-quoted names pass through untouched
        assert_eq!(fields_clause(&names(&["`id`", "name"])), "`id`,`name`");
    }

    #[test]
    fn group_by_quotes_and_joins() {
        assert_eq!(group_by_clause(&[]), "");
        assert_eq!(group_by_clause(&names(&["status", "`role`"])), "GROUP BY `status`,`role`");
    }

    #[test]
    fn validates_column_names() {
        assert!(validate_column("user_name").is_ok());
        assert!(validate_column("_hidden").is_ok());
        assert!(validate_column("").is_err());
        assert!(validate_column("1col").is_err());
        assert!(validate_column("name; DROP TABLE users").is_err());
    }
}
