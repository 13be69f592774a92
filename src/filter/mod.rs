pub mod error;
pub mod expr;
pub mod filter;
pub mod filter_fields;
pub mod filter_order;
pub mod filter_where;
pub mod types;

pub use error::FilterError;
pub use expr::{CmpOp, Expr};
pub use filter::Filter;
pub use filter_where::WhereClause;
pub use types::{SelectQuery, SortDirection, SqlResult};
