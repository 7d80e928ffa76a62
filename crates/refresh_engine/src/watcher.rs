use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use refresh_core::{cache_busted_url, ChangeDetector};
use refresh_logging::watch_trace;

use crate::extract::{extract_sources, DEFAULT_SCRIPT_PATTERN};
use crate::fetch::Fetcher;
use crate::WatchError;

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Fetches `check_url` (cache-busted with the current timestamp) and
/// extracts the script references found in the body.
///
/// One fetch per call, no retries; a transport failure propagates as
/// [`WatchError::Fetch`].
pub async fn extract_new_scripts(
    fetcher: &dyn Fetcher,
    check_url: &str,
    pattern: &str,
) -> Result<Vec<String>, WatchError> {
    let url = cache_busted_url(check_url, epoch_ms());
    let html = fetcher.fetch_text(&url).await?;
    let scripts = extract_sources(&html, pattern)?;
    watch_trace!("extracted {} script refs from {}", scripts.len(), check_url);
    Ok(scripts)
}

/// One page's update detector: fetch, extract, and compare against the
/// snapshot this watcher owns.
///
/// Watchers are independent; polling the same page from two watchers keeps
/// two separate baselines.
pub struct UpdateWatcher {
    fetcher: Arc<dyn Fetcher>,
    check_url: String,
    pattern: String,
    detector: ChangeDetector,
}

impl UpdateWatcher {
    /// Watcher for `check_url` using the default script pattern.
    pub fn new(fetcher: Arc<dyn Fetcher>, check_url: impl Into<String>) -> Self {
        Self::with_pattern(fetcher, check_url, DEFAULT_SCRIPT_PATTERN)
    }

    pub fn with_pattern(
        fetcher: Arc<dyn Fetcher>,
        check_url: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            check_url: check_url.into(),
            pattern: pattern.into(),
            detector: ChangeDetector::new(),
        }
    }

    /// Runs one fetch/extract cycle and reports whether the extracted
    /// sequence differs from the previous one.
    ///
    /// The first successful call establishes the baseline and always
    /// reports `false`. The snapshot is replaced on every successful call,
    /// changed or not.
    pub async fn need_update(&mut self) -> Result<bool, WatchError> {
        let scripts =
            extract_new_scripts(self.fetcher.as_ref(), &self.check_url, &self.pattern).await?;
        Ok(self.detector.observe(scripts))
    }

    /// The most recent snapshot, if any check has completed.
    pub fn snapshot(&self) -> Option<&[String]> {
        self.detector.snapshot()
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}
