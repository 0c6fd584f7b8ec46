use {crate::home_directory::HomeDirectory, anyhow::ensure, clap::Parser};

#[derive(Parser)]
pub struct InitCmd;

impl InitCmd {
    pub fn run(&self, home: &HomeDirectory) -> anyhow::Result<()> {
        ensure!(
            !home.config_file().exists(),
            "config file already exists: {}",
            home.config_file().display()
        );

        std::fs::create_dir_all(&**home)?;
        std::fs::write(
            home.config_file(),
            include_str!("../testdata/default_config.toml"),
        )?;

        tracing::info!("Config written to: {}", home.config_file().display());

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
