use std::sync::{mpsc, Arc};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use refresh_logging::{set_poll_cycle, watch_debug, watch_error, watch_info};

use crate::events::{ChannelEventSink, EventSink};
use crate::extract::DEFAULT_SCRIPT_PATTERN;
use crate::fetch::Fetcher;
use crate::host::{PageReload, UpdatePrompt};
use crate::watcher::UpdateWatcher;
use crate::{PollCycle, WatchEvent};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_MESSAGE: &str = "Page has updates, click OK to refresh page";

type Callback = Box<dyn Fn() + Send + Sync>;

/// Configuration for one polling controller. Immutable once spawned.
pub struct AutoRefreshOptions {
    /// Time between checks; the first check fires one interval after spawn.
    pub duration: Duration,
    /// Prompt text shown when a change is detected.
    pub message: String,
    /// Absolute URL to poll. Relative forms are resolved up front with
    /// [`refresh_core::resolve_check_url`].
    pub check_url: String,
    /// Extraction pattern; capture group 1 is the script reference.
    pub pattern: String,
    /// Fired once per detected change, before the prompt. Not isolated: a
    /// panicking callback takes the polling task down with it.
    pub on_update_detected: Option<Callback>,
    /// Fired once, only when the user accepts, before the reload.
    pub on_before_reload: Option<Callback>,
}

impl AutoRefreshOptions {
    /// Options for `check_url` with the defaults: 2 s interval, default
    /// prompt message, default script pattern, no callbacks.
    pub fn for_url(check_url: impl Into<String>) -> Self {
        Self {
            duration: DEFAULT_DURATION,
            message: DEFAULT_MESSAGE.to_string(),
            check_url: check_url.into(),
            pattern: DEFAULT_SCRIPT_PATTERN.to_string(),
            on_update_detected: None,
            on_before_reload: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn on_update_detected(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_update_detected = Some(Box::new(callback));
        self
    }

    pub fn on_before_reload(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_before_reload = Some(Box::new(callback));
        self
    }
}

/// Spawns polling loops. The loop runs as a tokio task until a reload is
/// accepted, the handle is stopped, or a check fails.
pub struct RefreshController;

impl RefreshController {
    pub fn spawn(
        options: AutoRefreshOptions,
        fetcher: Arc<dyn Fetcher>,
        prompt: Arc<dyn UpdatePrompt>,
        reload: Arc<dyn PageReload>,
    ) -> RefreshHandle {
        let (event_tx, event_rx) = mpsc::channel();
        let sink = ChannelEventSink::new(event_tx);
        let token = CancellationToken::new();
        let task = tokio::spawn(run_loop(
            options,
            fetcher,
            prompt,
            reload,
            sink,
            token.clone(),
        ));
        RefreshHandle {
            token,
            task,
            event_rx,
        }
    }
}

/// Cancellation handle for a spawned polling loop.
pub struct RefreshHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
    event_rx: mpsc::Receiver<WatchEvent>,
}

impl RefreshHandle {
    /// Stops polling. Idempotent: safe before the first check, between
    /// checks, and after the loop has already exited. An in-flight fetch
    /// is not aborted; its result is discarded at the next cycle boundary.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Whether the polling loop is still alive.
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && !self.task.is_finished()
    }

    /// Drains one pending event, if any.
    pub fn try_recv(&self) -> Option<WatchEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_loop(
    options: AutoRefreshOptions,
    fetcher: Arc<dyn Fetcher>,
    prompt: Arc<dyn UpdatePrompt>,
    reload: Arc<dyn PageReload>,
    sink: ChannelEventSink,
    token: CancellationToken,
) {
    let mut watcher = UpdateWatcher::with_pattern(
        fetcher,
        options.check_url.clone(),
        options.pattern.clone(),
    );
    let mut cycle: PollCycle = 0;

    loop {
        // Exactly one pending timer exists at a time; stop() wakes it
        // instead of letting it fire.
        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(options.duration) => {}
        }
        if token.is_cancelled() {
            break;
        }

        cycle += 1;
        set_poll_cycle(cycle);

        match watcher.need_update().await {
            Ok(true) => {
                watch_info!("cycle {}: change detected on {}", cycle, watcher.check_url());
                sink.emit(WatchEvent::ChangeDetected { cycle });
                if let Some(callback) = &options.on_update_detected {
                    callback();
                }
                if prompt.confirm(&options.message).await {
                    if let Some(callback) = &options.on_before_reload {
                        callback();
                    }
                    sink.emit(WatchEvent::ReloadTriggered { cycle });
                    reload.reload();
                    // The reload ends the page lifecycle; nothing further
                    // is scheduled.
                    return;
                }
                // Declined: a normal continuation, keep checking.
                sink.emit(WatchEvent::CheckCompleted {
                    cycle,
                    changed: true,
                });
            }
            Ok(false) => {
                sink.emit(WatchEvent::CheckCompleted {
                    cycle,
                    changed: false,
                });
            }
            Err(err) => {
                watch_error!("cycle {}: check of {} failed: {}", cycle, watcher.check_url(), err);
                sink.emit(WatchEvent::CheckFailed {
                    cycle,
                    message: err.to_string(),
                });
                break;
            }
        }
    }

    sink.emit(WatchEvent::Stopped);
    watch_debug!("polling stopped after {} cycles", cycle);
}
