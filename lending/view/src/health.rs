use {
    alloy_primitives::U256,
    serde::{Deserialize, Serialize},
};

/// The contract reports the health factor multiplied by this.
pub const HEALTH_FACTOR_SCALE: f64 = 100.0;

/// Below this the dashboard shows the liquidation warning. Sits inside the
/// `Elevated` band, above the `Danger` boundary.
pub const AT_RISK_THRESHOLD: f64 = 1.2;

/// Health factor at which the gauge is full.
pub const GAUGE_MAX: f64 = 2.5;

/// Legend printed under the gauge.
pub const GAUGE_LEGEND: [&str; 3] = ["1.0 (Liquidation)", "1.5 (Caution)", "2.0+ (Safe)"];

/// Risk band of a health factor, ordered from safest to riskiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Safe,
    Caution,
    Elevated,
    Danger,
}

impl RiskTier {
    /// Thresholds in descending order; the first one the health factor
    /// reaches wins.
    const THRESHOLDS: [(f64, RiskTier); 3] = [
        (2.0, RiskTier::Safe),
        (1.5, RiskTier::Caution),
        (1.1, RiskTier::Elevated),
    ];

    pub fn classify(health_factor: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| health_factor >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(RiskTier::Danger)
    }

    pub fn color_token(self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Caution => "caution",
            RiskTier::Elevated => "elevated",
            RiskTier::Danger => "danger",
        }
    }

    /// Green, yellow, orange, red.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            RiskTier::Safe => (0x4a, 0xde, 0x80),
            RiskTier::Caution => (0xfa, 0xcc, 0x15),
            RiskTier::Elevated => (0xfb, 0x92, 0x3c),
            RiskTier::Danger => (0xf8, 0x71, 0x71),
        }
    }

    /// CSS form of [`RiskTier::rgb`], e.g. `#4ade80`.
    pub fn color_hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Display state of the health factor card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthFactorDisplay {
    /// `raw / 100`, or positive infinity if the account has no health factor.
    /// Serialized as `null` when infinite.
    pub numeric: f64,
    pub tier: RiskTier,
    pub at_risk: bool,
    /// Fraction of the gauge to fill, in `[0, 1]`.
    pub fill: f64,
}

impl HealthFactorDisplay {
    pub fn color_token(&self) -> &'static str {
        self.tier.color_token()
    }

    pub fn is_infinite(&self) -> bool {
        self.numeric.is_infinite()
    }

    /// `∞` for an absent health factor, otherwise two decimals.
    pub fn label(&self) -> String {
        if self.is_infinite() {
            "∞".to_string()
        } else {
            format!("{:.2}", self.numeric)
        }
    }
}

/// Turn the raw on-chain health factor into display values.
///
/// An absent health factor means the account has no debt: it is shown as
/// infinite and safe, never as zero.
pub fn compute_health_factor_display(raw: Option<U256>) -> HealthFactorDisplay {
    let numeric = match raw {
        Some(raw) => scaled_to_f64(raw) / HEALTH_FACTOR_SCALE,
        None => f64::INFINITY,
    };

    HealthFactorDisplay {
        numeric,
        tier: RiskTier::classify(numeric),
        at_risk: numeric > 0.0 && numeric < AT_RISK_THRESHOLD,
        fill: gauge_fill(numeric),
    }
}

/// Fill fraction of the bounded gauge.
pub fn gauge_fill(numeric: f64) -> f64 {
    if numeric.is_infinite() {
        return 1.0;
    }

    (numeric / GAUGE_MAX).clamp(0.0, 1.0)
}

fn scaled_to_f64(raw: U256) -> f64 {
    // Anything beyond u128 is safe by many orders of magnitude.
    u128::try_from(raw).map_or(u128::MAX as f64, |raw| raw as f64)
}

// ----------------------------------- tests -----------------------------------
