//! # tb-core
//!
//! Value types and wire contracts for the typebook schema registry client.
//!
//! This crate has no I/O. It provides:
//! - [`SemVer`] with the registry's strict `vMAJOR.MINOR.PATCH` grammar
//! - Wire entities ([`Schema`], [`SchemaId`], [`Subject`], [`Config`],
//!   [`Compatibility`]) with validated decoding
//! - Version selector resolution shared by schema fetches and compatibility
//!   checks
//! - [`CoreError`] for validation and decode failures

pub mod compatibility;
pub mod config;
pub mod errors;
pub mod schema;
pub mod selector;
pub mod semver;
pub mod subject;

pub use compatibility::Compatibility;
pub use config::{Config, Property};
pub use errors::CoreError;
pub use schema::{Schema, SchemaId};
pub use selector::{SchemaTarget, VersionSelector, resolve_target};
pub use semver::SemVer;
pub use subject::Subject;
