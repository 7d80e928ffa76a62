use url::Url;

/// Appends a cache-busting `_timestamp` query parameter to `check_url`.
///
/// Uses `&` when the URL already carries a query string, `?` otherwise.
/// The caller supplies the timestamp so this stays a pure string
/// transformation.
pub fn cache_busted_url(check_url: &str, timestamp_ms: u64) -> String {
    let separator = if check_url.contains('?') { '&' } else { '?' };
    format!("{check_url}{separator}_timestamp={timestamp_ms}")
}

/// Resolves a possibly-relative check URL (e.g. `/` or `status.html`)
/// against the base of the page being watched.
pub fn resolve_check_url(base: &Url, check_url: &str) -> Result<Url, url::ParseError> {
    base.join(check_url)
}
