use {
    alloy::primitives::{Address, U256},
    async_trait::async_trait,
    lending_view::{Position, Snapshot},
};

/// Reads an account's state from the lending pool.
///
/// `Ok(None)` means the pool has nothing for the account.
#[async_trait]
pub trait PoolReader: Send + Sync {
    async fn position(&self, account: Address) -> anyhow::Result<Option<Position>>;

    /// Health factor multiplied by 100.
    async fn health_factor(&self, account: Address) -> anyhow::Result<Option<U256>>;
}

/// Take a snapshot of an account, or of nobody if no account is connected.
///
/// The two reads are independent. A read that fails is logged and treated as
/// absent, so the dashboard degrades to a partial view instead of erroring.
pub async fn read_snapshot<R>(reader: &R, account: Option<Address>) -> Snapshot
where
    R: PoolReader + ?Sized,
{
    let Some(account) = account else {
        return Snapshot::DISCONNECTED;
    };

    let (position, health_factor) =
        tokio::join!(reader.position(account), reader.health_factor(account));

    Snapshot {
        position: position.unwrap_or_else(|err| {
            tracing::warn!(%account, "Failed to read position: {err:#}");
            None
        }),
        health_factor: health_factor.unwrap_or_else(|err| {
            tracing::warn!(%account, "Failed to read health factor: {err:#}");
            None
        }),
    }
}
