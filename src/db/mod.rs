//! Database layer: connection pool and repositories

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
