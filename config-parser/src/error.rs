use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file `{path}`: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
