pub mod gateway;
pub mod manager;
pub mod record;

pub use gateway::{GatewayTransaction, Selection, TableGateway};
pub use manager::{ConnectionManager, GatewayError};
pub use record::{Record, RecordError};
