pub mod bootstrap;
pub mod schema_gen;

pub use bootstrap::*;
pub use schema_gen::*;
