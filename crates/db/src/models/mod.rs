//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the endpoints that act on it

pub mod category;
pub mod question;
pub mod quiz;
