/// Host capability: ask the user whether to reload.
///
/// The controller awaits the answer inline, so no further polling work
/// happens while the question is shown. A host whose dialog is blocking
/// keeps its page-halting semantics; a test double answers immediately.
#[async_trait::async_trait]
pub trait UpdatePrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Host capability: trigger a full page reload.
pub trait PageReload: Send + Sync {
    fn reload(&self);
}
