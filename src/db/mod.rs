//! Generic access to the live database: connection, introspection,
//! statement building and the fixed domain reports.

pub mod catalog;
pub mod connection;
pub mod error;
pub mod query;
pub mod reports;
pub mod value;

pub use catalog::*;
pub use connection::*;
pub use error::*;
pub use query::*;
pub use reports::*;
pub use value::*;
