// src/api/schemas.rs
//! Typed request and response bodies of the backend services
//!
//! Field names follow the camelCase JSON the services emit. Optional fields
//! are the ones the services leave null on some paths; everything else is
//! required, so a body that lacks it fails to decode instead of yielding a
//! half-populated value.

use crate::products::{ProductConfig, ProductKind};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// --- auth ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "CLIENT")]
    Client,
    #[serde(alias = "RESEARCHER")]
    Researcher,
    #[serde(alias = "PORTFOLIO_MANAGER")]
    PortfolioManager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// --- user profile ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentExperience {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

/// Body of `GET`/`POST /api/users/profile`
///
/// The user service fills `id`, `userId` and the timestamps; a profile sent
/// for update may leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(default)]
    pub investment_experience: Option<InvestmentExperience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

// --- products ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductKind,
    pub underlying_asset: String,
    pub strike: f64,
    pub barrier: f64,
    pub coupon: f64,
    pub notional: f64,
    pub maturity_months: u32,
    pub issuer: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductKind,
    pub underlying_asset: String,
}

// --- pricing ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub product_type: ProductKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barrier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_free_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_maturity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_simulations: Option<u32>,
}

impl PricingRequest {
    /// Request with every model input left to the pricing engine's defaults
    pub fn for_kind(product_type: ProductKind) -> Self {
        PricingRequest {
            product_type,
            spot_price: None,
            strike: None,
            barrier: None,
            coupon: None,
            volatility: None,
            risk_free_rate: None,
            time_to_maturity: None,
            num_simulations: None,
        }
    }

    /// Request carrying the contract terms of a configured product
    ///
    /// Market inputs (spot, volatility, rate, maturity) stay with the engine.
    pub fn for_config(config: &ProductConfig) -> Self {
        PricingRequest {
            strike: Some(config.strike),
            barrier: Some(config.barrier),
            coupon: Some(config.coupon),
            ..PricingRequest::for_kind(config.payoff_type.into())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub price: f64,
    #[serde(default)]
    pub greeks: BTreeMap<String, f64>,
    #[serde(default)]
    pub confidence_interval: Option<f64>,
    #[serde(default)]
    pub num_simulations: Option<u32>,
    #[serde(default)]
    pub pricing_method: Option<String>,
}

// --- trades ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    Pending,
    Booked,
    Confirmed,
    Settled,
    Cancelled,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "PENDING",
            TradeStatus::Booked => "BOOKED",
            TradeStatus::Confirmed => "CONFIRMED",
            TradeStatus::Settled => "SETTLED",
            TradeStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub product_id: String,
    pub trade_type: TradeType,
    pub notional: f64,
    pub entry_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub trade_type: TradeType,
    pub status: TradeStatus,
    pub notional: f64,
    pub entry_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(default)]
    pub trade_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub settlement_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub maturity_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

// --- lifecycle ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleEventType {
    Fixing,
    CouponPayment,
    BarrierBreach,
    KnockIn,
    KnockOut,
    Autocall,
    Maturity,
    EarlyRedemption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleEventStatus {
    Pending,
    Processed,
    Failed,
    Cancelled,
}

/// One entry of `GET /api/lifecycle/events/{tradeId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleEventResponse {
    pub id: String,
    pub trade_id: String,
    pub product_id: String,
    pub event_type: LifecycleEventType,
    #[serde(default)]
    pub event_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub underlying_price: Option<f64>,
    #[serde(default)]
    pub barrier_level: Option<f64>,
    #[serde(default)]
    pub coupon_amount: Option<f64>,
    pub status: LifecycleEventStatus,
    #[serde(default)]
    pub processed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

// --- portfolio ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub total_investment: f64,
    pub total_pnl: f64,
    pub pnl_percentage: f64,
    pub position_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub product: Option<ProductSummary>,
    pub quantity: f64,
    pub entry_price: f64,
    pub current_value: f64,
    pub total_investment: f64,
    pub unrealized_pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub summary: PortfolioTotals,
    #[serde(default)]
    pub positions: Vec<Position>,
}

// --- market data ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

// --- analytics ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    pub var95: f64,
    pub var99: f64,
    pub beta: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub max_drawdown: f64,
    pub volatility: f64,
    pub correlation_spy: f64,
}

// --- reports ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Portfolio,
    Risk,
    Performance,
    Trades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Csv,
    Xlsx,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub format: ReportFormat,
}

// --- strategies and backtests ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub asset_list: Vec<String>,
    #[serde(default)]
    pub indicators: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub rules: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestRequest {
    pub strategy_id: String,
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_capital: f64,
}

/// Headline statistics of a backtest run (snake_case on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResults {
    pub total_return: f64,
    /// Sent pre-formatted as a string by the backtest service
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub total_trades: u32,
    pub profitable_trades: u32,
    pub final_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResponse {
    pub id: String,
    pub results: BacktestResults,
    #[serde(default)]
    pub equity_curve: Vec<EquityPoint>,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("'{}' is not a number: {}", s, e))),
    }
}
