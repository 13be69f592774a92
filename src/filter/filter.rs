//! Assembles complete statements for one table from a `SelectQuery`.

use serde_json::Value;

use super::error::FilterError;
use super::filter_fields::{fields_clause, group_by_clause, quote_field, validate_column};
use super::filter_order::{limit_clause, order_by_clause};
use super::types::{SelectQuery, SqlResult};

pub struct Filter {
    table_name: String,
    query: SelectQuery,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        Self::validate_table_name(&table_name)?;
        Ok(Self { table_name, query: SelectQuery::default() })
    }

    pub fn assign(mut self, query: SelectQuery) -> Self {
        self.query = query;
        self
    }

    /// Full SELECT statement. Clause spacing follows the legacy layout:
    /// every sub-clause slot is emitted even when empty.
    pub fn to_select_sql(&self) -> Result<SqlResult, FilterError> {
        let where_result = self.to_where_sql()?;
        let fields = fields_clause(&self.query.fields);
        let group_by = group_by_clause(&self.query.group_by);
        let order = order_by_clause(&self.query.order_by, self.query.direction);

        let mut query = format!(
            "SELECT {} FROM `{}` {} {} {} ",
            fields, self.table_name, where_result.query, group_by, order
        );
        let limit = limit_clause(self.query.offset, self.query.limit);
        if !limit.is_empty() {
            query.push_str(&limit);
        }

        Ok(SqlResult { query, params: where_result.params })
    }

    pub fn to_count_sql(&self) -> Result<SqlResult, FilterError> {
        let where_result = self.to_where_sql()?;
        Ok(SqlResult {
            query: format!(
                "SELECT count(id) as `count` FROM `{}` {} ",
                self.table_name, where_result.query
            ),
            params: where_result.params,
        })
    }

    /// UPDATE statement; SET parameters precede WHERE parameters.
    pub fn to_update_sql(&self, fields: &[(String, Value)]) -> Result<SqlResult, FilterError> {
        if fields.is_empty() {
            return Err(FilterError::InvalidUpdate(
                "UPDATE requires at least one field assignment".to_string(),
            ));
        }
        let where_result = self.to_where_sql()?;

        let mut assignments = Vec::with_capacity(fields.len());
        let mut params = Vec::with_capacity(fields.len() + where_result.params.len());
        for (field, value) in fields {
            validate_column(field)?;
            assignments.push(format!("{} = ?", quote_field(field)));
            params.push(value.clone());
        }
        params.extend(where_result.params);

        Ok(SqlResult {
            query: format!(
                "UPDATE `{}` SET {} {}",
                self.table_name,
                assignments.join(", "),
                where_result.query
            ),
            params,
        })
    }

    pub fn to_delete_sql(&self) -> Result<SqlResult, FilterError> {
        let where_result = self.to_where_sql()?;
        Ok(SqlResult {
            query: format!("DELETE FROM `{}` {}", self.table_name, where_result.query),
            params: where_result.params,
        })
    }

    pub fn to_where_sql(&self) -> Result<SqlResult, FilterError> {
        match &self.query.filters {
            Some(filters) => filters.to_sql(),
            None => Ok(SqlResult::empty()),
        }
    }

    fn validate_table_name(name: &str) -> Result<(), FilterError> {
        if name.is_empty() {
            return Err(FilterError::InvalidTableName("Table name cannot be empty".to_string()));
        }
        let first = name.chars().next().unwrap();
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') || (!first.is_alphabetic() && first != '_') {
            return Err(FilterError::InvalidTableName(format!("Invalid table name format: {}", name)));
        }
        Ok(())
    }
}
