// src/products/product.rs
//! Structured product definitions
//!
//! Two layers describe a product:
//! - [`ProductDraft`]: the editable record behind the product creator form,
//!   including descriptive fields that never influence the payoff.
//! - [`ProductConfig`]: the immutable numeric snapshot consumed by the
//!   payoff curve generator, rebuilt from the draft on every edit.

use crate::api::schemas::ProductRequest;
use crate::error::{validation::*, PayoffError, PayoffResult};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every product kind known to the product catalog
///
/// The product service stores kinds upper-case; the UI sends them lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[serde(alias = "DIGITAL_OPTION")]
    DigitalOption,
    #[serde(alias = "BARRIER_OPTION")]
    BarrierOption,
    #[serde(alias = "DUAL_CURRENCY")]
    DualCurrency,
    #[serde(alias = "AUTOCALLABLE")]
    Autocallable,
    #[serde(alias = "REVERSE_CONVERTIBLE")]
    ReverseConvertible,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::DigitalOption => "digital_option",
            ProductKind::BarrierOption => "barrier_option",
            ProductKind::DualCurrency => "dual_currency",
            ProductKind::Autocallable => "autocallable",
            ProductKind::ReverseConvertible => "reverse_convertible",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product kinds with a client-side payoff rule
///
/// This is a closed set: kinds such as dual-currency investments are priced
/// only by the backend and have no terminal payoff rule here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoffType {
    /// Pays `notional * coupon` if spot > strike
    DigitalOption,
    /// Pays `notional * coupon` if spot > barrier and spot > strike
    BarrierOption,
}

impl TryFrom<ProductKind> for PayoffType {
    type Error = PayoffError;

    fn try_from(kind: ProductKind) -> PayoffResult<Self> {
        match kind {
            ProductKind::DigitalOption => Ok(PayoffType::DigitalOption),
            ProductKind::BarrierOption => Ok(PayoffType::BarrierOption),
            other => Err(PayoffError::UnsupportedOperation {
                operation: "payoff curve".to_string(),
                context: format!("product kind '{}' has no payoff rule", other),
            }),
        }
    }
}

impl From<PayoffType> for ProductKind {
    fn from(payoff_type: PayoffType) -> Self {
        match payoff_type {
            PayoffType::DigitalOption => ProductKind::DigitalOption,
            PayoffType::BarrierOption => ProductKind::BarrierOption,
        }
    }
}

/// Numeric inputs of one payoff calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub payoff_type: PayoffType,
    /// Reference price level
    pub strike: f64,
    /// Trigger level (only read by barrier options)
    pub barrier: f64,
    /// Face amount
    pub notional: f64,
    /// Fractional payout rate applied to notional
    pub coupon: f64,
}

impl ProductConfig {
    pub fn digital(strike: f64, notional: f64, coupon: f64) -> Self {
        ProductConfig {
            payoff_type: PayoffType::DigitalOption,
            strike,
            barrier: strike,
            notional,
            coupon,
        }
    }

    pub fn barrier(strike: f64, barrier: f64, notional: f64, coupon: f64) -> Self {
        ProductConfig {
            payoff_type: PayoffType::BarrierOption,
            strike,
            barrier,
            notional,
            coupon,
        }
    }

    /// The fixed amount paid when the payoff condition holds
    pub fn payout(&self) -> f64 {
        self.notional * self.coupon
    }
}

/// Editable product record backing the product creator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub kind: ProductKind,
    pub underlying_asset: String,
    pub strike: f64,
    pub barrier: f64,
    pub coupon: f64,
    pub notional: f64,
    pub maturity_months: u32,
    pub issuer: String,
    pub currency: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            kind: ProductKind::DigitalOption,
            underlying_asset: "EUR/USD".to_string(),
            strike: 1.10,
            barrier: 1.05,
            coupon: 0.08,
            notional: 100_000.0,
            maturity_months: 12,
            issuer: "Dealer 1".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl ProductDraft {
    /// Snapshot the numeric fields for a payoff calculation
    ///
    /// Numbers are passed through as typed; the generator accepts any finite
    /// input. Only the product kind can make this fail.
    pub fn to_config(&self) -> PayoffResult<ProductConfig> {
        let payoff_type = PayoffType::try_from(self.kind)?;
        Ok(ProductConfig {
            payoff_type,
            strike: self.strike,
            barrier: self.barrier,
            notional: self.notional,
            coupon: self.coupon,
        })
    }

    /// Checks run before the draft is submitted to the product service
    pub fn validate_for_save(&self) -> PayoffResult<()> {
        validate_not_blank("name", &self.name)?;
        validate_not_blank("underlying_asset", &self.underlying_asset)?;
        validate_not_blank("issuer", &self.issuer)?;
        validate_not_blank("currency", &self.currency)?;

        validate_finite("strike", self.strike)?;
        validate_positive("strike", self.strike)?;
        validate_finite("barrier", self.barrier)?;
        validate_positive("barrier", self.barrier)?;
        validate_finite("notional", self.notional)?;
        validate_positive("notional", self.notional)?;
        validate_finite("coupon", self.coupon)?;
        validate_half_open_range("coupon", self.coupon, 0.0, 1.0)?;
        validate_months("maturity_months", self.maturity_months)?;

        Ok(())
    }

    /// Maturity date for a product traded on `trade_date`
    ///
    /// Month arithmetic clamps to the last valid day (31 Jan + 1M = 28/29 Feb).
    pub fn maturity_date(&self, trade_date: NaiveDate) -> PayoffResult<NaiveDate> {
        trade_date
            .checked_add_months(Months::new(self.maturity_months))
            .ok_or_else(|| PayoffError::InvalidConfiguration {
                field: "maturity_months".to_string(),
                reason: format!(
                    "{} months after {} is out of the supported date range",
                    self.maturity_months, trade_date
                ),
            })
    }

    /// Validated wire body for `POST /api/products`
    pub fn to_request(&self) -> PayoffResult<ProductRequest> {
        self.validate_for_save()?;
        Ok(ProductRequest {
            name: self.name.trim().to_string(),
            product_type: self.kind,
            underlying_asset: self.underlying_asset.clone(),
            strike: self.strike,
            barrier: self.barrier,
            coupon: self.coupon,
            notional: self.notional,
            maturity_months: self.maturity_months,
            issuer: self.issuer.clone(),
            currency: self.currency.clone(),
        })
    }
}
