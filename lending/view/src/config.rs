use serde::{Deserialize, Serialize};

/// Decimals of the native collateral asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// The pool's minimum collateralization, in percent. Must match the value
/// enforced by the contract, or the displayed max borrow will disagree with
/// what the contract accepts.
pub const DEFAULT_COLLATERAL_RATIO_PERCENT: u32 = 150;

/// Placeholder USD price of the collateral asset. The pool has no price feed
/// yet, so this is injected through configuration.
pub const DEFAULT_REFERENCE_PRICE_USD: f64 = 2000.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ViewConfigError {
    #[error("reference price must be a finite, non-negative number; got {0}")]
    InvalidReferencePrice(f64),

    #[error("collateral ratio must be at least 100 percent; got {0}")]
    InvalidCollateralRatio(u32),

    #[error("asset decimals must not exceed 77; got {0}")]
    InvalidDecimals(u8),
}

/// Parameters of the view model, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub reference_price_usd: f64,
    pub collateral_ratio_percent: u32,
    pub collateral_decimals: u8,
    pub debt_decimals: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            reference_price_usd: DEFAULT_REFERENCE_PRICE_USD,
            collateral_ratio_percent: DEFAULT_COLLATERAL_RATIO_PERCENT,
            collateral_decimals: NATIVE_DECIMALS,
            debt_decimals: NATIVE_DECIMALS,
        }
    }
}

impl ViewConfig {
    pub fn new(reference_price_usd: f64) -> Result<Self, ViewConfigError> {
        Self {
            reference_price_usd,
            ..Default::default()
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, ViewConfigError> {
        if !self.reference_price_usd.is_finite() || self.reference_price_usd < 0.0 {
            return Err(ViewConfigError::InvalidReferencePrice(
                self.reference_price_usd,
            ));
        }

        if self.collateral_ratio_percent < 100 {
            return Err(ViewConfigError::InvalidCollateralRatio(
                self.collateral_ratio_percent,
            ));
        }

        // U256 can't hold 10^78.
        for decimals in [self.collateral_decimals, self.debt_decimals] {
            if decimals > 77 {
                return Err(ViewConfigError::InvalidDecimals(decimals));
            }
        }

        Ok(self)
    }
}

// ----------------------------------- tests -----------------------------------
