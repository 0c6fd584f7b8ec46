use {
    anyhow::anyhow,
    std::{
        ops::Deref,
        path::{Path, PathBuf},
    },
};

/// Name of the default home directory, under the user's home.
const DEFAULT_DIR_NAME: &str = ".instant-lending";

/// Where the CLI keeps its configuration.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given directory, or `~/.instant-lending` if none.
    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        match home {
            Some(home) => Ok(Self::new(home)),
            None => {
                let user_home =
                    home::home_dir().ok_or_else(|| anyhow!("failed to find home directory"))?;

                Ok(Self::new(user_home.join(DEFAULT_DIR_NAME)))
            },
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}

impl Deref for HomeDirectory {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.home
    }
}
