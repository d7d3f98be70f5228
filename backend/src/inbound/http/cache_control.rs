//! Shared cache-control policies for HTTP handlers.

/// Responses that must never be cached, such as API results and probes.
pub const NO_STORE: &str = "no-store";

/// Pages may be stored but must be revalidated so content edits show up on
/// the next request.
pub const PUBLIC_NO_CACHE: &str = "public, no-cache";

/// Header tuple for [`NO_STORE`].
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}

/// Header tuple for [`PUBLIC_NO_CACHE`].
pub const fn page_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_NO_CACHE)
}
