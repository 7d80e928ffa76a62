//! Refresh core: snapshot diffing and URL helpers, no IO.
mod snapshot;
mod urls;

pub use snapshot::ChangeDetector;
pub use urls::{cache_busted_url, resolve_check_url};
