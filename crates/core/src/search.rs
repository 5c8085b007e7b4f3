//! Question text search helpers.

/// Term used when the client sends no search term (or an empty one).
pub const DEFAULT_SEARCH_TERM: &str = " ";

/// Resolve the effective search term, falling back to [`DEFAULT_SEARCH_TERM`].
pub fn effective_term(term: Option<&str>) -> &str {
    match term {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_SEARCH_TERM,
    }
}

/// Build an `ILIKE` pattern that matches `term` anywhere in the text.
///
/// `%`, `_` and `\` in the term are escaped so they match literally; the
/// query must use `ESCAPE '\'`.
///
/// # Examples
///
/// ```
/// use trivia_core::search::like_pattern;
/// assert_eq!(like_pattern("what is"), "%what is%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
