// src/api/endpoints.rs
//! Backend routes used by the dashboard
//!
//! Every call the UI makes goes through one of these variants, so the route
//! table lives in exactly one place. Identifiers and symbols are
//! percent-encoded as single path segments (`EUR/USD` becomes `EUR%2FUSD`).

use crate::api::schemas::TradeStatus;
use crate::config::ApiConfig;
use std::fmt;

/// Lookback used by the market data endpoint when none is given
pub const DEFAULT_MARKET_DATA_DAYS: u32 = 252;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Login,
    Register,
    AuthHealth,
    GetProfile,
    UpdateProfile,
    ListProducts,
    CreateProduct,
    GetProduct { id: String },
    MyProducts,
    PriceMonteCarlo,
    PriceCalculate,
    ListStrategies,
    CreateStrategy,
    GetStrategy { id: String },
    RunBacktest,
    BacktestHistory,
    Portfolio,
    /// Position parameters travel as query string, the body is empty
    CreatePosition {
        product_id: String,
        quantity: f64,
        entry_price: f64,
    },
    ListTrades,
    BookTrade,
    GetTrade { id: String },
    UpdateTradeStatus { id: String, status: TradeStatus },
    TradeEvents { trade_id: String },
    ProcessFixings,
    CheckBarriers,
    GenerateReport,
    MarketData { symbol: String, days: u32 },
    RiskMetrics,
}

impl Endpoint {
    pub fn market_data(symbol: impl Into<String>) -> Self {
        Endpoint::MarketData {
            symbol: symbol.into(),
            days: DEFAULT_MARKET_DATA_DAYS,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::AuthHealth
            | Endpoint::GetProfile
            | Endpoint::ListProducts
            | Endpoint::GetProduct { .. }
            | Endpoint::MyProducts
            | Endpoint::ListStrategies
            | Endpoint::GetStrategy { .. }
            | Endpoint::BacktestHistory
            | Endpoint::Portfolio
            | Endpoint::ListTrades
            | Endpoint::GetTrade { .. }
            | Endpoint::TradeEvents { .. }
            | Endpoint::MarketData { .. }
            | Endpoint::RiskMetrics => HttpMethod::Get,
            Endpoint::UpdateTradeStatus { .. } => HttpMethod::Put,
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::UpdateProfile
            | Endpoint::CreateProduct
            | Endpoint::PriceMonteCarlo
            | Endpoint::PriceCalculate
            | Endpoint::CreateStrategy
            | Endpoint::RunBacktest
            | Endpoint::CreatePosition { .. }
            | Endpoint::BookTrade
            | Endpoint::ProcessFixings
            | Endpoint::CheckBarriers
            | Endpoint::GenerateReport => HttpMethod::Post,
        }
    }

    /// Path and query string, relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/auth/login".to_string(),
            Endpoint::Register => "/api/auth/register".to_string(),
            Endpoint::AuthHealth => "/api/auth/health".to_string(),
            Endpoint::GetProfile | Endpoint::UpdateProfile => "/api/users/profile".to_string(),
            Endpoint::ListProducts | Endpoint::CreateProduct => "/api/products".to_string(),
            Endpoint::GetProduct { id } => format!("/api/products/{}", urlencoding::encode(id)),
            Endpoint::MyProducts => "/api/products/my-products".to_string(),
            Endpoint::PriceMonteCarlo => "/api/pricing/monte-carlo".to_string(),
            Endpoint::PriceCalculate => "/api/pricing/calculate".to_string(),
            Endpoint::ListStrategies | Endpoint::CreateStrategy => "/api/strategies".to_string(),
            Endpoint::GetStrategy { id } => {
                format!("/api/strategies/{}", urlencoding::encode(id))
            }
            Endpoint::RunBacktest => "/api/backtest".to_string(),
            Endpoint::BacktestHistory => "/api/backtest/history".to_string(),
            Endpoint::Portfolio => "/api/portfolio".to_string(),
            Endpoint::CreatePosition {
                product_id,
                quantity,
                entry_price,
            } => format!(
                "/api/portfolio/positions?productId={}&quantity={}&entryPrice={}",
                urlencoding::encode(product_id),
                quantity,
                entry_price
            ),
            Endpoint::ListTrades => "/api/trades".to_string(),
            Endpoint::BookTrade => "/api/trades/book".to_string(),
            Endpoint::GetTrade { id } => format!("/api/trades/{}", urlencoding::encode(id)),
            Endpoint::UpdateTradeStatus { id, status } => format!(
                "/api/trades/{}/status?status={}",
                urlencoding::encode(id),
                status.as_str()
            ),
            Endpoint::TradeEvents { trade_id } => {
                format!("/api/lifecycle/events/{}", urlencoding::encode(trade_id))
            }
            Endpoint::ProcessFixings => "/api/lifecycle/process-fixings".to_string(),
            Endpoint::CheckBarriers => "/api/lifecycle/check-barriers".to_string(),
            Endpoint::GenerateReport => "/api/reports/generate".to_string(),
            Endpoint::MarketData { symbol, days } => format!(
                "/api/market-data/{}?days={}",
                urlencoding::encode(symbol),
                days
            ),
            Endpoint::RiskMetrics => "/api/analytics/risk-metrics".to_string(),
        }
    }

    /// Absolute URL under `config.base_url`
    pub fn url(&self, config: &ApiConfig) -> String {
        format!("{}{}", config.base_url.trim().trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_status_update_route() {
        let endpoint = Endpoint::UpdateTradeStatus {
            id: "T-1001".to_string(),
            status: TradeStatus::Confirmed,
        };
        assert_eq!(endpoint.method(), HttpMethod::Put);
        assert_eq!(endpoint.path(), "/api/trades/T-1001/status?status=CONFIRMED");
    }

    #[test]
    fn test_market_data_symbol_is_encoded() {
        let endpoint = Endpoint::market_data("EUR/USD");
        assert_eq!(endpoint.path(), "/api/market-data/EUR%2FUSD?days=252");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let cfg = ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Endpoint::Portfolio.url(&cfg),
            "http://localhost:8080/api/portfolio"
        );
    }

    #[test]
    fn test_position_parameters_go_in_query() {
        let endpoint = Endpoint::CreatePosition {
            product_id: "p 9".to_string(),
            quantity: 10.0,
            entry_price: 99.5,
        };
        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(
            endpoint.path(),
            "/api/portfolio/positions?productId=p%209&quantity=10&entryPrice=99.5"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Endpoint::BookTrade.to_string(), "POST /api/trades/book");
    }
}
