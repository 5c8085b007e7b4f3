use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A listing produced no rows for the requested page.
    #[error("No {entity} on page {page}")]
    EmptyPage { entity: &'static str, page: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
