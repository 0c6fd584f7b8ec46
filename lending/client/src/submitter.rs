use {
    alloy::primitives::TxHash,
    async_trait::async_trait,
    lending_view::{Action, ActionForm, SubmitRequest},
    std::sync::atomic::{AtomicBool, Ordering},
};

/// Sends pool writes and owns their outcome.
#[async_trait]
pub trait TxSubmitter: Send + Sync {
    /// Send the request and wait until it's no longer pending.
    async fn submit(&self, request: SubmitRequest) -> anyhow::Result<TxHash>;

    fn is_pending(&self, action: Action) -> bool;
}

/// Per-action pending flags for a [`TxSubmitter`].
#[derive(Debug, Default)]
pub struct PendingActions {
    supply: AtomicBool,
    borrow: AtomicBool,
}

impl PendingActions {
    pub fn is_pending(&self, action: Action) -> bool {
        self.flag(action).load(Ordering::Acquire)
    }

    /// Mark the action pending until the returned guard drops.
    pub fn start(&self, action: Action) -> PendingGuard<'_> {
        let flag = self.flag(action);
        flag.store(true, Ordering::Release);
        PendingGuard { flag }
    }

    fn flag(&self, action: Action) -> &AtomicBool {
        match action {
            Action::Supply => &self.supply,
            Action::Borrow => &self.borrow,
        }
    }
}

pub struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Submit a form through the transaction layer.
///
/// Returns `None` if the form had nothing valid to send. Otherwise the form
/// is cleared, held in `Submitting` for the duration of the call and synced
/// with the submitter's pending flag afterwards, whatever the outcome.
pub async fn dispatch<S>(form: &mut ActionForm, submitter: &S) -> Option<anyhow::Result<TxHash>>
where
    S: TxSubmitter + ?Sized,
{
    let request = form.submit()?;

    tracing::info!(action = %request.action, amount = %request.amount, "Dispatching");

    let result = submitter.submit(request).await;

    form.sync(submitter.is_pending(request.action));

    Some(result)
}

// ----------------------------------- tests -----------------------------------
