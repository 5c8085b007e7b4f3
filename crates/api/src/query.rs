//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trivia_core::lenient;
use trivia_core::pagination::DEFAULT_PAGE;

/// Page selector (`?page=`) accepted by every paginated endpoint.
///
/// A missing or non-integer value selects the first page. Extracted through
/// [`LenientQuery`](crate::extract::LenientQuery), so a malformed query string
/// does too.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient::page_number")]
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}
