use {
    crate::{AmountError, ViewConfig, stage_amount},
    alloy_primitives::U256,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A write the dashboard can send to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Deposit native collateral; the amount travels as call value.
    Supply,
    /// Borrow the debt asset against supplied collateral.
    Borrow,
}

impl Action {
    /// Decimals of the asset the action's amount is denominated in.
    pub fn decimals(self, config: &ViewConfig) -> u8 {
        match self {
            Action::Supply => config.collateral_decimals,
            Action::Borrow => config.debt_decimals,
        }
    }

    /// Label of the submit control, naming the asset while idle, e.g.
    /// `Supply ETH` or `Borrowing...`.
    pub fn button_label(self, state: SubmitState, symbol: &str) -> String {
        match (self, state) {
            (Action::Supply, SubmitState::Idle) => format!("Supply {symbol}"),
            (Action::Supply, SubmitState::Submitting) => "Supplying...".to_string(),
            (Action::Borrow, SubmitState::Idle) => format!("Borrow {symbol}"),
            (Action::Borrow, SubmitState::Submitting) => "Borrowing...".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Supply => f.write_str("supply"),
            Action::Borrow => f.write_str("borrow"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    #[default]
    Idle,
    /// A request was dispatched and the transaction layer still reports it as
    /// pending.
    Submitting,
}

/// What the transaction layer is asked to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    pub action: Action,
    /// In smallest units of the action's asset.
    pub amount: U256,
}

/// Local input state of one action's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionForm {
    action: Action,
    decimals: u8,
    input: String,
    state: SubmitState,
}

impl ActionForm {
    pub fn new(action: Action, config: &ViewConfig) -> Self {
        Self {
            action,
            decimals: action.decimals(config),
            input: String::new(),
            state: SubmitState::Idle,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn set_input<T>(&mut self, input: T)
    where
        T: Into<String>,
    {
        self.input = input.into();
    }

    pub fn staged(&self) -> Result<U256, AmountError> {
        stage_amount(&self.input, self.decimals)
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == SubmitState::Idle && self.staged().is_ok()
    }

    pub fn button_label(&self, symbol: &str) -> String {
        self.action.button_label(self.state, symbol)
    }

    /// Dispatch the current input.
    ///
    /// On success the input is cleared right away and the form waits in
    /// `Submitting` until [`ActionForm::sync`] sees the transaction settle.
    /// Returns `None`, leaving everything untouched, if a submission is
    /// already in flight or the input doesn't stage.
    pub fn submit(&mut self) -> Option<SubmitRequest> {
        if self.state == SubmitState::Submitting {
            tracing::debug!(action = %self.action, "Submission already in flight");
            return None;
        }

        let amount = match self.staged() {
            Ok(amount) => amount,
            Err(err) => {
                tracing::debug!(action = %self.action, %err, "Ignoring submission");
                return None;
            },
        };

        self.input.clear();
        self.state = SubmitState::Submitting;

        Some(SubmitRequest {
            action: self.action,
            amount,
        })
    }

    /// Follow the transaction layer's pending flag for this action.
    pub fn sync(&mut self, pending: bool) {
        if self.state == SubmitState::Submitting && !pending {
            self.state = SubmitState::Idle;
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    fn supply_form() -> ActionForm {
        ActionForm::new(Action::Supply, &ViewConfig::default())
    }

    #[test]
    fn valid_submission_clears_input_and_blocks() {
        let mut form = supply_form();
        form.set_input("1.5");
        assert!(form.is_submit_enabled());

        let request = form.submit().unwrap();

        assert_eq!(request, SubmitRequest {
            action: Action::Supply,
            amount: U256::from(1_500_000_000_000_000_000u128),
        });
        assert_eq!(form.input(), "");
        assert_eq!(form.state(), SubmitState::Submitting);
        assert_eq!(form.button_label("ETH"), "Supplying...");
    }

    #[test_case(Action::Supply, SubmitState::Idle => "Supply ETH"; "supply idle")]
    #[test_case(Action::Supply, SubmitState::Submitting => "Supplying..."; "supplying")]
    #[test_case(Action::Borrow, SubmitState::Idle => "Borrow USDC"; "borrow idle")]
    #[test_case(Action::Borrow, SubmitState::Submitting => "Borrowing..."; "borrowing")]
    fn labelling_buttons(action: Action, state: SubmitState) -> String {
        let symbol = match action {
            Action::Supply => "ETH",
            Action::Borrow => "USDC",
        };

        action.button_label(state, symbol)
    }

    #[test]
    fn invalid_submission_is_a_no_op() {
        for input in ["", "0", "-5", "abc"] {
            let mut form = supply_form();
            form.set_input(input);

            assert!(!form.is_submit_enabled());
            assert_eq!(form.submit(), None);
            assert_eq!(form.input(), input);
            assert_eq!(form.state(), SubmitState::Idle);
        }
    }

    #[test]
    fn resubmission_is_blocked_until_settled() {
        let mut form = supply_form();
        form.set_input("1");
        form.submit().unwrap();

        form.set_input("2");
        assert!(!form.is_submit_enabled());
        assert_eq!(form.submit(), None);
        assert_eq!(form.input(), "2");

        form.sync(true);
        assert_eq!(form.state(), SubmitState::Submitting);

        form.sync(false);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.submit().map(|request| request.amount), Some(U256::from(
            2_000_000_000_000_000_000u128
        )));
    }

    #[test]
    fn sync_does_not_leave_idle() {
        let mut form = supply_form();
        form.sync(true);

        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn forms_use_their_asset_decimals() {
        let config = ViewConfig {
            debt_decimals: 6,
            ..Default::default()
        };
        let mut borrow = ActionForm::new(Action::Borrow, &config);
        borrow.set_input("2.5");

        assert_eq!(borrow.submit().map(|request| request.amount), Some(U256::from(2_500_000u64)));
    }
}
