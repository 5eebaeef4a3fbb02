mod compatibility;
mod config;
mod schema;
mod subject;

pub use compatibility::CompatibilityCommands;
pub use config::ConfigCommands;
pub use schema::{SchemaCommands, SchemaGetArgs};
pub use subject::SubjectCommands;
