use {
    crate::{
        PendingActions, PoolReader, TxSubmitter,
        bindings::IInstantLendingPool::{self, IInstantLendingPoolInstance},
    },
    alloy::{
        network::ReceiptResponse,
        primitives::{Address, TxHash, U256},
        providers::DynProvider,
    },
    anyhow::ensure,
    async_trait::async_trait,
    lending_view::{Action, Position, SubmitRequest},
};

/// A deployed `InstantLendingPool`, reachable through a provider.
pub struct LendingPool {
    contract: IInstantLendingPoolInstance<DynProvider>,
    pending: PendingActions,
}

impl LendingPool {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            contract: IInstantLendingPool::new(address, provider),
            pending: PendingActions::default(),
        }
    }
}

#[async_trait]
impl PoolReader for LendingPool {
    async fn position(&self, account: Address) -> anyhow::Result<Option<Position>> {
        let res = self.contract.positions(account).call().await?;

        // The pool's mapping has no notion of a missing entry; an unknown
        // account reads as `(0, 0)`.
        Ok(Some(Position::new(res.supplied, res.borrowed)))
    }

    async fn health_factor(&self, account: Address) -> anyhow::Result<Option<U256>> {
        let raw = self.contract.getHealthFactor(account).call().await?;

        Ok(Some(raw))
    }
}

#[async_trait]
impl TxSubmitter for LendingPool {
    async fn submit(&self, request: SubmitRequest) -> anyhow::Result<TxHash> {
        let _pending = self.pending.start(request.action);

        let pending_tx = match request.action {
            Action::Supply => self.contract.supply().value(request.amount).send().await?,
            Action::Borrow => self.contract.borrow(request.amount).send().await?,
        };

        let tx_hash = *pending_tx.tx_hash();

        tracing::info!(action = %request.action, %tx_hash, "Transaction sent, waiting for receipt");

        let receipt = pending_tx.get_receipt().await?;

        ensure!(
            receipt.status(),
            "{} transaction {tx_hash} reverted",
            request.action
        );

        tracing::info!(
            action = %request.action,
            %tx_hash,
            block = ?receipt.block_number(),
            "Transaction included"
        );

        Ok(tx_hash)
    }

    fn is_pending(&self, action: Action) -> bool {
        self.pending.is_pending(action)
    }
}
