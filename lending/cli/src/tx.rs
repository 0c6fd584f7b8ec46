use {
    crate::{config::Config, home_directory::HomeDirectory, prompt::confirm},
    alloy::primitives::U256,
    anyhow::{anyhow, bail},
    clap::Parser,
    colored::Colorize,
    config_parser::parse_config,
    lending_client::{LendingPool, MNEMONIC_ENV, connect, dispatch, signer_from_env},
    lending_view::{Action, ActionForm, PositionViewModel, format_amount},
};

#[derive(Parser)]
pub struct TxCmd {
    /// Amount in whole units, e.g. `0.5`
    amount: String,

    /// Skip the confirmation prompt
    #[arg(short, long, default_value_t = false)]
    yes: bool,
}

impl TxCmd {
    pub async fn run(self, action: Action, app_dir: HomeDirectory) -> anyhow::Result<()> {
        let cfg: Config = parse_config(app_dir.config_file())?;

        let signer = signer_from_env()?
            .ok_or_else(|| anyhow!("no account connected; set `{MNEMONIC_ENV}` to {action}"))?;
        let (provider, sender) = connect(&cfg.chain.rpc_url, Some(signer))?;
        let pool = LendingPool::new(cfg.pool.deployed_address()?, provider);

        let mut model = PositionViewModel::new(cfg.view.validate()?);
        let form = model.form_mut(action);
        let amount = stage_input(form, &self.amount)?;

        let symbol = match action {
            Action::Supply => &cfg.pool.collateral_symbol,
            Action::Borrow => &cfg.pool.debt_symbol,
        };

        if !self.yes {
            let prompt = format!(
                "🤔 Confirm {action} of {} {symbol} from {}?",
                format_amount(amount, form.decimals()),
                sender.map(|a| a.to_string()).unwrap_or_default(),
            );

            if !confirm(prompt.bold())? {
                println!("🤷 User aborted");
                return Ok(());
            }
        }

        match dispatch(form, &pool).await {
            Some(Ok(tx_hash)) => {
                println!("✅ {} included: {tx_hash}", form.button_label(symbol));
            },
            Some(Err(err)) => {
                bail!("{action} failed: {err:#}");
            },
            None => {
                bail!("nothing to submit");
            },
        }

        Ok(())
    }
}

/// Put the user's amount into the form. Invalid input is an error, so the
/// process exits non-zero when nothing was sent.
fn stage_input(form: &mut ActionForm, amount: &str) -> anyhow::Result<U256> {
    form.set_input(amount);

    form.staged().map_err(|err| {
        anyhow!("nothing sent; `{amount}` is not a valid amount: {err}")
    })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, lending_view::ViewConfig, test_case::test_case};

    #[test_case("abc"; "not a number")]
    #[test_case("0"; "zero")]
    #[test_case(""; "empty")]
    #[test_case("0.0000000000000000001"; "too precise")]
    fn invalid_amount_is_an_error(amount: &str) {
        let mut form = ActionForm::new(Action::Supply, &ViewConfig::default());

        assert!(stage_input(&mut form, amount).is_err());
        assert!(!form.is_submit_enabled());
    }

    #[test]
    fn valid_amount_is_staged() {
        let mut form = ActionForm::new(Action::Borrow, &ViewConfig::default());

        assert_eq!(
            stage_input(&mut form, "2.5").unwrap(),
            U256::from(2_500_000_000_000_000_000u128)
        );
        assert!(form.is_submit_enabled());
    }
}
