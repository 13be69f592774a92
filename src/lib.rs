pub mod config;
pub mod database;
pub mod error;
pub mod filter;

pub use database::{GatewayError, Record, Selection, TableGateway};
pub use filter::{Expr, SelectQuery, SortDirection, WhereClause};
