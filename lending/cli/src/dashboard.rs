use {
    crate::{
        config::{Config, PoolConfig},
        home_directory::HomeDirectory,
        prompt::print_json_pretty,
    },
    alloy::primitives::Address,
    clap::Parser,
    colored::{ColoredString, Colorize},
    config_parser::parse_config,
    lending_client::{LendingPool, SnapshotPoller, connect, read_snapshot, signer_from_env},
    lending_view::{DashboardView, GAUGE_LEGEND, HealthFactorDisplay, Snapshot, render},
};

/// Width of the health factor gauge, in characters.
const GAUGE_WIDTH: usize = 30;

const LIQUIDATION_BANNER: &str = "⚠️  At Risk of Liquidation!";

#[derive(Parser)]
pub struct DashboardCmd {
    /// Account to inspect [default: the signer from `EVM_MNEMONIC`, if any]
    #[arg(long)]
    account: Option<Address>,

    /// Keep polling and print the dashboard again whenever it changes
    #[arg(long, default_value_t = false)]
    watch: bool,

    /// Print JSON instead of the human-readable dashboard
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl DashboardCmd {
    pub async fn run(self, app_dir: HomeDirectory) -> anyhow::Result<()> {
        let cfg: Config = parse_config(app_dir.config_file())?;
        let view_cfg = cfg.view.validate()?;

        let (provider, signer) = connect(&cfg.chain.rpc_url, signer_from_env()?)?;
        let pool = LendingPool::new(cfg.pool.deployed_address()?, provider);
        let account = self.account.or(signer);

        if account.is_none() {
            tracing::info!("No account connected; pass `--account` or set `EVM_MNEMONIC`");
        }

        if !self.watch {
            let snapshot = read_snapshot(&pool, account).await;
            return self.print(&cfg.pool, account, &snapshot, &render(&snapshot, &view_cfg));
        }

        let mut poller = SnapshotPoller::new(&pool, account, cfg.watch.poll_interval());

        loop {
            tokio::select! {
                snapshot = poller.next_change() => {
                    self.print(&cfg.pool, account, &snapshot, &render(&snapshot, &view_cfg))?;
                },
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, stopping");
                    return Ok(());
                },
            }
        }
    }

    fn print(
        &self,
        pool: &PoolConfig,
        account: Option<Address>,
        snapshot: &Snapshot,
        view: &DashboardView,
    ) -> anyhow::Result<()> {
        if self.json {
            return print_json_pretty(view);
        }

        tracing::debug!(?snapshot, "Rendering");

        println!("{}", "Your Dashboard".bold());
        match account {
            Some(account) => println!("Account: {account}"),
            None => println!("{}", "Not connected".dimmed()),
        }
        println!();

        print_health_factor(&view.health_factor, &view.health_factor_label);

        if let Some(banner) = liquidation_banner(view) {
            println!("{}", banner.red().bold());
        }
        println!();

        let position = &view.position;
        println!("{}", "Your Position".bold());
        println!(
            "  Supplied:          {} {}",
            position.supplied_display, pool.collateral_symbol
        );
        println!(
            "  Borrowed:          {} {}",
            position.borrowed_display, pool.debt_symbol
        );
        println!("  Collateral Value:  ${}", position.collateral_value_label());
        println!("  Max Borrow:        ${}", position.max_borrow_label());
        println!();

        Ok(())
    }
}

fn print_health_factor(display: &HealthFactorDisplay, label: &str) {
    println!(
        "{} {} ({})",
        "Health Factor".bold(),
        tinted(display, label).bold(),
        display.color_token()
    );
    println!("  [{}]", tinted(display, &gauge_bar(display.fill)));
    println!("  {}", GAUGE_LEGEND.join("   ").dimmed());
}

fn liquidation_banner(view: &DashboardView) -> Option<&'static str> {
    view.show_liquidation_warning.then_some(LIQUIDATION_BANNER)
}

/// The gauge as `GAUGE_WIDTH` cells, filled from the left.
fn gauge_bar(fill: f64) -> String {
    let filled = (fill.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}

fn tinted(display: &HealthFactorDisplay, text: &str) -> ColoredString {
    let (r, g, b) = display.tier.rgb();
    text.truecolor(r, g, b)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::U256,
        lending_view::{ViewConfig, compute_health_factor_display},
        test_case::test_case,
    };

    fn filled_cells(bar: &str) -> usize {
        bar.chars().filter(|c| *c == '█').count()
    }

    #[test_case(0.0 => 0; "empty")]
    #[test_case(0.5 => 15; "half")]
    #[test_case(1.0 => 30; "full")]
    #[test_case(0.49 => 15; "rounds to nearest cell")]
    #[test_case(f64::INFINITY => 30; "infinite is clamped")]
    fn drawing_gauge(fill: f64) -> usize {
        let bar = gauge_bar(fill);
        assert_eq!(bar.chars().count(), GAUGE_WIDTH);

        filled_cells(&bar)
    }

    #[test]
    fn absent_health_factor_fills_the_gauge() {
        let display = compute_health_factor_display(None);

        assert_eq!(filled_cells(&gauge_bar(display.fill)), GAUGE_WIDTH);
    }

    #[test_case(None => None; "no debt")]
    #[test_case(Some(250) => None; "safe")]
    #[test_case(Some(120) => None; "at threshold")]
    #[test_case(Some(119) => Some(LIQUIDATION_BANNER); "below threshold")]
    #[test_case(Some(0) => None; "zero")]
    fn showing_banner(raw: Option<u64>) -> Option<&'static str> {
        let snapshot = Snapshot {
            position: None,
            health_factor: raw.map(U256::from),
        };

        liquidation_banner(&render(&snapshot, &ViewConfig::default()))
    }
}
