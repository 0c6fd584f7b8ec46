use {
    crate::ViewConfig,
    alloy_primitives::{U256, utils::format_units},
    serde::{Deserialize, Serialize},
};

/// An account's balances in the pool, in smallest units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Collateral, in the native asset.
    pub supplied: U256,
    /// Debt, in the debt asset.
    pub borrowed: U256,
}

impl Position {
    pub const fn new(supplied: U256, borrowed: U256) -> Self {
        Self { supplied, borrowed }
    }
}

impl From<(U256, U256)> for Position {
    fn from((supplied, borrowed): (U256, U256)) -> Self {
        Self { supplied, borrowed }
    }
}

/// Display state of the position card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDisplay {
    pub supplied_display: String,
    pub borrowed_display: String,
    pub collateral_value_usd: f64,
    pub max_borrow_usd: f64,
}

impl PositionDisplay {
    pub fn collateral_value_label(&self) -> String {
        format!("{:.2}", self.collateral_value_usd)
    }

    pub fn max_borrow_label(&self) -> String {
        format!("{:.2}", self.max_borrow_usd)
    }
}

/// Turn the raw on-chain position into display values.
///
/// An absent position is displayed exactly like an empty one.
pub fn compute_position_display(position: Option<Position>, config: &ViewConfig) -> PositionDisplay {
    let position = position.unwrap_or_default();

    let supplied_display = format_amount(position.supplied, config.collateral_decimals);
    let borrowed_display = format_amount(position.borrowed, config.debt_decimals);

    // The string is an exact decimal, so parsing it rounds only once.
    let supplied = supplied_display.parse::<f64>().unwrap_or_default();
    let collateral_value_usd = supplied * config.reference_price_usd;

    PositionDisplay {
        supplied_display,
        borrowed_display,
        collateral_value_usd,
        max_borrow_usd: max_borrow_usd(collateral_value_usd, config.collateral_ratio_percent),
    }
}

/// Largest debt, in USD, that the given collateral supports.
///
/// `collateral_ratio_percent` must be nonzero; [`ViewConfig::validate`]
/// guarantees at least 100.
pub fn max_borrow_usd(collateral_value_usd: f64, collateral_ratio_percent: u32) -> f64 {
    debug_assert!(collateral_ratio_percent > 0, "collateral ratio must be nonzero");

    collateral_value_usd * 100.0 / f64::from(collateral_ratio_percent)
}

/// Render an amount in smallest units as a decimal string, without rounding.
/// Trailing fractional zeros are dropped, so zero renders as `0` and
/// `1.5 × 10^18` at 18 decimals as `1.5`.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    let formatted = match format_units(amount, decimals) {
        Ok(formatted) => formatted,
        // Only reachable with more than 77 decimals, which `ViewConfig`
        // refuses.
        Err(_) => return amount.to_string(),
    };

    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        },
        None => formatted,
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*, test_case::test_case};

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test_case(0, 18 => "0"; "zero")]
    #[test_case(ETHER, 18 => "1"; "one ether")]
    #[test_case(ETHER * 3 / 2, 18 => "1.5"; "one and a half")]
    #[test_case(1, 18 => "0.000000000000000001"; "one wei")]
    #[test_case(1_234_567_890_123_456_789, 18 => "1.234567890123456789"; "full precision")]
    #[test_case(1_000_000, 6 => "1"; "six decimals")]
    #[test_case(42, 0 => "42"; "no decimals")]
    fn formatting(amount: u128, decimals: u8) -> String {
        format_amount(U256::from(amount), decimals)
    }

    #[test]
    fn reference_scenario() {
        let position = Position::new(U256::from(2 * ETHER), U256::from(1000 * ETHER));
        let display = compute_position_display(Some(position), &ViewConfig::default());

        assert_eq!(display.supplied_display, "2");
        assert_eq!(display.borrowed_display, "1000");
        assert_eq!(display.collateral_value_usd, 4000.0);
        assert_eq!(display.collateral_value_label(), "4000.00");
        assert_eq!(display.max_borrow_label(), "2666.67");
    }

    #[test]
    fn absent_position_displays_as_empty() {
        let config = ViewConfig::default();

        assert_eq!(
            compute_position_display(None, &config),
            compute_position_display(Some(Position::default()), &config)
        );

        let display = compute_position_display(None, &config);
        assert_eq!(display.supplied_display, "0");
        assert_eq!(display.borrowed_display, "0");
        assert_eq!(display.collateral_value_usd, 0.0);
        assert_eq!(display.max_borrow_usd, 0.0);
    }

    #[test]
    fn debt_decimals_are_configurable() {
        let config = ViewConfig {
            debt_decimals: 6,
            ..Default::default()
        };
        let position = Position::new(U256::ZERO, U256::from(2_500_000u64));

        assert_eq!(compute_position_display(Some(position), &config).borrowed_display, "2.5");
    }

    #[test]
    fn price_is_injected() {
        let config = ViewConfig::new(3000.0).unwrap();
        let position = Position::new(U256::from(ETHER / 2), U256::ZERO);

        assert_eq!(
            compute_position_display(Some(position), &config).collateral_value_usd,
            1500.0
        );
    }

    #[test]
    #[should_panic = "collateral ratio must be nonzero"]
    #[cfg(debug_assertions)]
    fn zero_collateral_ratio_is_refused() {
        max_borrow_usd(4000.0, 0);
    }

    proptest! {
        #[test]
        fn max_borrow_is_two_thirds(collateral in 0.0f64..1e15) {
            let max = max_borrow_usd(collateral, 150);
            prop_assert!((max - collateral * 2.0 / 3.0).abs() <= 1e-9 * collateral.max(1.0));
        }

        #[test]
        fn formatting_is_exact(amount in any::<u128>()) {
            let formatted = format_amount(U256::from(amount), 18);
            let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, ""));
            let digits = format!("{whole}{fraction:0<18}");
            prop_assert_eq!(digits.parse::<u128>().unwrap(), amount);
        }
    }
}
