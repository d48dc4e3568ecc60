//! Ordered fallback over candidate strategies

use std::future::Future;

/// Try each candidate in order and return the first `Some` result
///
/// Candidates after the first success are never attempted. Errors stop the
/// iteration and are returned as-is.
pub async fn first_some<C, T, E, F, Fut>(
    candidates: impl IntoIterator<Item = C>,
    mut attempt: F,
) -> Result<Option<T>, E>
where
    F: FnMut(C) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    for candidate in candidates {
        if let Some(found) = attempt(candidate).await? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
