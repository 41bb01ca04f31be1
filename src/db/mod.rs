pub mod pool;
pub mod queries;
pub mod schema;
pub mod source;

pub use pool::DbPool;
pub use source::DataSource;
