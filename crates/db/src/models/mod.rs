//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` payload DTO as received from clients
//! - A validated input struct passed to the repository layer

pub mod answer;
pub mod question;
pub mod vote;
