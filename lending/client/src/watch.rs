use {
    crate::{PoolReader, read_snapshot},
    alloy::primitives::Address,
    lending_view::Snapshot,
    std::time::Duration,
    tokio::time::{Interval, MissedTickBehavior, interval},
};

/// Polls a pool on a fixed interval and reports only snapshots that differ
/// from the previous one.
pub struct SnapshotPoller<'a, R: ?Sized> {
    reader: &'a R,
    account: Option<Address>,
    ticker: Interval,
    last: Option<Snapshot>,
}

impl<'a, R> SnapshotPoller<'a, R>
where
    R: PoolReader + ?Sized,
{
    pub fn new(reader: &'a R, account: Option<Address>, period: Duration) -> Self {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            reader,
            account,
            ticker,
            last: None,
        }
    }

    /// Wait for the next snapshot that changed. The first call returns
    /// immediately with the current state.
    pub async fn next_change(&mut self) -> Snapshot {
        loop {
            self.ticker.tick().await;

            let snapshot = read_snapshot(self.reader, self.account).await;

            if self.last.as_ref() == Some(&snapshot) {
                tracing::debug!("Snapshot unchanged");
                continue;
            }

            self.last = Some(snapshot);

            return snapshot;
        }
    }
}
