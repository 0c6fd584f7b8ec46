use {
    alloy::{
        network::{ReceiptResponse, TransactionBuilder},
        primitives::{Address, Bytes},
        providers::Provider,
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, anyhow, ensure},
    serde::Deserialize,
    std::{fs, path::Path},
};

/// Name of the contract the deploy command expects to find in the artifact.
pub const POOL_CONTRACT_NAME: &str = "InstantLendingPool";

/// The part of a Hardhat compilation artifact needed to deploy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let raw = fs::read(path)
            .with_context(|| format!("failed to read artifact `{}`", path.display()))?;
        let artifact: Artifact = serde_json::from_slice(&raw)
            .with_context(|| format!("malformed artifact `{}`", path.display()))?;

        ensure!(
            artifact.contract_name == POOL_CONTRACT_NAME,
            "artifact `{}` is for `{}`, expected `{POOL_CONTRACT_NAME}`",
            path.display(),
            artifact.contract_name
        );

        ensure!(
            !artifact.bytecode.is_empty(),
            "artifact `{}` has no bytecode; is the contract abstract?",
            path.display()
        );

        Ok(artifact)
    }
}

/// Deploys the pool from its creation bytecode and waits for the receipt.
///
/// # Returns
///
/// * The address of the deployed contract.
///
/// # Errors
///
/// * If the transaction can't be sent, reverts, or the receipt carries no
///   contract address.
pub async fn deploy_pool(provider: &impl Provider, artifact: &Artifact) -> anyhow::Result<Address> {
    tracing::info!(contract = %artifact.contract_name, "Deploying");

    let receipt = provider
        .send_transaction(
            TransactionRequest::default().with_deploy_code(artifact.bytecode.clone()),
        )
        .await?
        .get_receipt()
        .await?;

    ensure!(
        receipt.status(),
        "deployment transaction {} reverted",
        receipt.transaction_hash()
    );

    let address = receipt
        .contract_address()
        .ok_or_else(|| anyhow!("receipt of {} has no contract address", receipt.transaction_hash()))?;

    tracing::info!(%address, tx_hash = %receipt.transaction_hash(), "Deployed");

    Ok(address)
}

/// Block explorer page of an address.
pub fn explorer_link(explorer_url: &str, address: Address) -> String {
    format!("{}/address/{address}", explorer_url.trim_end_matches('/'))
}

// ----------------------------------- tests -----------------------------------
