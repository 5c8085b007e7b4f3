//! Domain logic for the trivia service.
//!
//! Nothing in this crate touches the network or the database, so the
//! pagination, quiz-selection and search rules can be unit tested in
//! isolation and shared by the storage and HTTP layers.

pub mod error;
pub mod lenient;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod types;
