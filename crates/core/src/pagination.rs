//! Fixed-size, 1-based pagination over an already ordered result set.
//!
//! Listing endpoints fetch the full ordered result and slice it here, so the
//! page contents are a pure function of `(items, page)`.

/// Number of questions returned per page by every listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Half-open index range `[start, end)` covered by `page`.
///
/// Returns `None` for pages below 1 or when the offset overflows.
pub fn page_range(page: i64, per_page: usize) -> Option<(usize, usize)> {
    if page < 1 {
        return None;
    }
    let index = usize::try_from(page - 1).ok()?;
    let start = index.checked_mul(per_page)?;
    let end = start.checked_add(per_page)?;
    Some((start, end))
}

/// Slice out `page` of `items` using [`QUESTIONS_PER_PAGE`].
///
/// Out-of-range pages yield an empty slice; callers treat that as not found.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    paginate_with(items, page, QUESTIONS_PER_PAGE)
}

/// Same as [`paginate`] with an explicit page size.
pub fn paginate_with<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    match page_range(page, per_page) {
        Some((start, end)) if start < items.len() => &items[start..end.min(items.len())],
        _ => &[],
    }
}
