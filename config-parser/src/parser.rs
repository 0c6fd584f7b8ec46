use {
    crate::error::Error,
    config::{Config, Environment, File},
    serde::{Serialize, de::DeserializeOwned},
    std::{fs, path::Path},
};

/// Prefix of the environment variables that override file values, e.g.
/// `LENDING__VIEW__REFERENCE_PRICE_USD=2500`.
pub const ENV_PREFIX: &str = "LENDING";

/// Nesting separator used in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Parse a TOML config file, overlaid with `LENDING__*` environment variables.
pub fn parse_config<D, P>(path: P) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    parse_config_with_prefix(path, ENV_PREFIX)
}

/// Same as [`parse_config`] but with a custom environment prefix.
pub fn parse_config_with_prefix<D, P>(path: P, prefix: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    let env_override = Environment::with_prefix(prefix)
        .separator(ENV_SEPARATOR)
        .try_parsing(true);

    let config = Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Write a config back to disk as TOML, replacing the previous content.
pub fn save_config<S, P>(path: P, config: &S) -> Result<(), Error>
where
    S: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = toml::to_string_pretty(config)?;

    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, assertor::*, serde::Deserialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestSettings {
        rpc_url: String,
        view: ViewSettings,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct ViewSettings {
        reference_price_usd: f64,
        collateral_ratio_percent: u32,
    }

    #[test]
    fn parse_config_file() {
        let config: TestSettings =
            parse_config_with_prefix("fixtures/config_test1.toml", "PARSE_TEST")
                .expect("Failed to parse file");

        assert_that!(config.rpc_url.as_str()).is_equal_to("http://localhost:8545");
        assert_that!(config.view.collateral_ratio_percent).is_equal_to(150);
    }

    #[test]
    fn environment_overrides_file() {
        std::env::set_var("OVERRIDE_TEST__VIEW__REFERENCE_PRICE_USD", "2500.5");

        let config: TestSettings =
            parse_config_with_prefix("fixtures/config_test1.toml", "OVERRIDE_TEST")
                .expect("Failed to parse file");

        assert_that!(config.view.reference_price_usd).is_equal_to(2500.5);
        assert_that!(config.rpc_url.as_str()).is_equal_to("http://localhost:8545");
    }

    #[test]
    fn missing_file_is_an_error() {
        let res: Result<TestSettings, _> =
            parse_config_with_prefix("fixtures/does_not_exist.toml", "MISSING_TEST");

        assert_that!(res.is_err()).is_true();
    }

    #[test]
    fn saved_config_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        let original = TestSettings {
            rpc_url: "https://rpc.example.org".to_string(),
            view: ViewSettings {
                reference_price_usd: 1800.0,
                collateral_ratio_percent: 150,
            },
        };

        save_config(&path, &original).unwrap();

        let parsed: TestSettings = parse_config_with_prefix(&path, "SAVE_TEST").unwrap();

        assert_that!(parsed).is_equal_to(original);
    }
}
