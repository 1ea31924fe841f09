/// Best-effort text notifications. Implementations swallow and log their own
/// failures; nothing is returned to the caller.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}
