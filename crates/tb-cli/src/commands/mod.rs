pub mod compatibility;
pub mod config;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod subject;
