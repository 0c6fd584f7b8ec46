use {
    alloy::primitives::Address,
    lending_view::ViewConfig,
    serde::{Deserialize, Serialize},
    std::{path::PathBuf, time::Duration},
};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub chain: ChainConfig,
    pub pool: PoolConfig,
    pub view: ViewConfig,
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            chain: ChainConfig::default(),
            pool: PoolConfig::default(),
            view: ViewConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub explorer_url: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            explorer_url: "https://megaexplorer.xyz".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Zero until the pool is deployed.
    pub address: Address,
    /// Hardhat artifact used by `deploy`, relative to the working directory.
    pub artifact: PathBuf,
    pub collateral_symbol: String,
    pub debt_symbol: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            address: Address::ZERO,
            artifact: PathBuf::from(
                "artifacts/contracts/InstantLendingPool.sol/InstantLendingPool.json",
            ),
            collateral_symbol: "ETH".to_string(),
            debt_symbol: "USDC".to_string(),
        }
    }
}

impl PoolConfig {
    pub fn deployed_address(&self) -> anyhow::Result<Address> {
        anyhow::ensure!(
            !self.address.is_zero(),
            "pool address is not configured; run `lending deploy` or set `pool.address`"
        );

        Ok(self.address)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(100))
    }
}

// ----------------------------------- tests -----------------------------------
