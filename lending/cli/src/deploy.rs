use {
    crate::{config::Config, home_directory::HomeDirectory},
    anyhow::anyhow,
    clap::Parser,
    colored::Colorize,
    config_parser::{parse_config, save_config},
    lending_client::{Artifact, MNEMONIC_ENV, connect, deploy_pool, explorer_link, signer_from_env},
    std::path::PathBuf,
};

#[derive(Parser)]
pub struct DeployCmd {
    /// Hardhat artifact to deploy [default: `pool.artifact` from the config]
    #[arg(long)]
    artifact: Option<PathBuf>,
}

impl DeployCmd {
    pub async fn run(self, app_dir: HomeDirectory) -> anyhow::Result<()> {
        let mut cfg: Config = parse_config(app_dir.config_file())?;

        let artifact = Artifact::load(self.artifact.as_ref().unwrap_or(&cfg.pool.artifact))?;

        let signer = signer_from_env()?
            .ok_or_else(|| anyhow!("set `{MNEMONIC_ENV}` to the deployer's mnemonic"))?;
        let (provider, deployer) = connect(&cfg.chain.rpc_url, Some(signer))?;

        tracing::info!(deployer = ?deployer, rpc_url = %cfg.chain.rpc_url, "Deploying with account");

        let address = deploy_pool(&provider, &artifact).await?;

        println!("{} {address}", "InstantLendingPool deployed to:".green().bold());
        println!("Explorer: {}", explorer_link(&cfg.chain.explorer_url, address));

        cfg.pool.address = address;
        save_config(app_dir.config_file(), &cfg)?;

        tracing::info!("Pool address saved to: {}", app_dir.config_file().display());

        Ok(())
    }
}
