use {
    crate::{
        Action, ActionForm, HealthFactorDisplay, Position, PositionDisplay, ViewConfig,
        compute_health_factor_display, compute_position_display,
    },
    alloy_primitives::U256,
    serde::Serialize,
};

/// The latest result of the two chain reads. Either half may be missing
/// while the other is already known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Option<Position>,
    /// Health factor multiplied by 100.
    pub health_factor: Option<U256>,
}

impl Snapshot {
    /// What an account that isn't connected sees.
    pub const DISCONNECTED: Self = Self {
        position: None,
        health_factor: None,
    };
}

/// Everything the dashboard shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub health_factor: HealthFactorDisplay,
    pub health_factor_label: String,
    /// Hex color of the health factor's tier.
    pub health_factor_color: String,
    pub position: PositionDisplay,
    pub show_liquidation_warning: bool,
}

/// View model of the dashboard: fixed configuration plus the two input
/// forms. The chain-derived part is recomputed from scratch on every
/// snapshot.
#[derive(Debug, Clone)]
pub struct PositionViewModel {
    config: ViewConfig,
    supply: ActionForm,
    borrow: ActionForm,
}

impl PositionViewModel {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            supply: ActionForm::new(Action::Supply, &config),
            borrow: ActionForm::new(Action::Borrow, &config),
            config,
        }
    }

    pub fn form(&self, action: Action) -> &ActionForm {
        match action {
            Action::Supply => &self.supply,
            Action::Borrow => &self.borrow,
        }
    }

    pub fn form_mut(&mut self, action: Action) -> &mut ActionForm {
        match action {
            Action::Supply => &mut self.supply,
            Action::Borrow => &mut self.borrow,
        }
    }

    pub fn render(&self, snapshot: &Snapshot) -> DashboardView {
        render(snapshot, &self.config)
    }
}

pub fn render(snapshot: &Snapshot, config: &ViewConfig) -> DashboardView {
    let health_factor = compute_health_factor_display(snapshot.health_factor);

    DashboardView {
        health_factor_label: health_factor.label(),
        health_factor_color: health_factor.tier.color_hex(),
        show_liquidation_warning: health_factor.at_risk,
        health_factor,
        position: compute_position_display(snapshot.position, config),
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::RiskTier};

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn disconnected_account() {
        let view = render(&Snapshot::DISCONNECTED, &ViewConfig::default());

        assert_eq!(view.position.supplied_display, "0");
        assert_eq!(view.position.borrowed_display, "0");
        assert_eq!(view.health_factor_label, "∞");
        assert_eq!(view.health_factor.tier, RiskTier::Safe);
        assert!(!view.show_liquidation_warning);
    }

    #[test]
    fn partial_snapshot_renders() {
        let snapshot = Snapshot {
            position: Some(Position::new(U256::from(ETHER), U256::ZERO)),
            health_factor: None,
        };
        let view = render(&snapshot, &ViewConfig::default());

        assert_eq!(view.position.supplied_display, "1");
        assert_eq!(view.position.collateral_value_label(), "2000.00");
        assert_eq!(view.health_factor_label, "∞");

        let snapshot = Snapshot {
            position: None,
            health_factor: Some(U256::from(115)),
        };
        let view = render(&snapshot, &ViewConfig::default());

        assert_eq!(view.position.supplied_display, "0");
        assert_eq!(view.health_factor.tier, RiskTier::Elevated);
        assert!(view.show_liquidation_warning);
    }

    #[test]
    fn forms_are_independent() {
        let mut model = PositionViewModel::new(ViewConfig::default());
        model.form_mut(Action::Supply).set_input("1");
        model.form_mut(Action::Borrow).set_input("100");

        model.form_mut(Action::Supply).submit().unwrap();

        assert_eq!(model.form(Action::Supply).input(), "");
        assert_eq!(model.form(Action::Borrow).input(), "100");
        assert!(model.form(Action::Borrow).is_submit_enabled());
    }

    #[test]
    fn view_serializes_infinite_health_factor_as_null() {
        let view = render(&Snapshot::DISCONNECTED, &ViewConfig::default());
        let json = serde_json::to_value(&view).unwrap();

        assert!(json["health_factor"]["numeric"].is_null());
        assert_eq!(json["health_factor"]["tier"], "safe");
        assert_eq!(json["health_factor_label"], "∞");
        assert_eq!(json["health_factor_color"], "#4ade80");
    }
}
