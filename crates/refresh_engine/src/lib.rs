//! Refresh engine: fetch, extraction, and the polling controller.
mod events;
mod extract;
mod fetch;
mod host;
mod poller;
mod types;
mod watcher;

pub use events::{ChannelEventSink, EventSink};
pub use extract::{extract_sources, DEFAULT_SCRIPT_PATTERN};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use host::{PageReload, UpdatePrompt};
pub use poller::{
    AutoRefreshOptions, RefreshController, RefreshHandle, DEFAULT_DURATION, DEFAULT_MESSAGE,
};
pub use types::{FailureKind, FetchError, PollCycle, WatchError, WatchEvent};
pub use watcher::{extract_new_scripts, UpdateWatcher};
