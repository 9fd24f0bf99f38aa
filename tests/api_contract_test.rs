// tests/api_contract_test.rs
use std::collections::BTreeMap;
use structured_payoff::api::schemas::{
    AuthResponse, BacktestRequest, BacktestResponse, InvestmentExperience, LifecycleEventResponse,
    LifecycleEventStatus, LifecycleEventType, LoginRequest, MarketDataPoint, PortfolioSummary,
    PricingResponse, RegisterRequest, ReportFormat, ReportRequest, ReportType, RiskMetrics,
    RiskTolerance, Role, StrategyRequest, TradeRequest, TradeResponse, TradeStatus, TradeType,
    UserProfile,
};
use structured_payoff::api::{decode_response, encode_request, Endpoint, HttpMethod};
use structured_payoff::config::ApiConfig;
use structured_payoff::products::{ProductDraft, ProductKind};
use structured_payoff::PayoffError;

#[test]
fn test_route_table() {
    let routes = [
        (Endpoint::Login, HttpMethod::Post, "/api/auth/login"),
        (Endpoint::Register, HttpMethod::Post, "/api/auth/register"),
        (Endpoint::AuthHealth, HttpMethod::Get, "/api/auth/health"),
        (Endpoint::GetProfile, HttpMethod::Get, "/api/users/profile"),
        (Endpoint::UpdateProfile, HttpMethod::Post, "/api/users/profile"),
        (Endpoint::ListProducts, HttpMethod::Get, "/api/products"),
        (Endpoint::CreateProduct, HttpMethod::Post, "/api/products"),
        (
            Endpoint::GetProduct { id: "p-42".to_string() },
            HttpMethod::Get,
            "/api/products/p-42",
        ),
        (Endpoint::MyProducts, HttpMethod::Get, "/api/products/my-products"),
        (Endpoint::PriceMonteCarlo, HttpMethod::Post, "/api/pricing/monte-carlo"),
        (Endpoint::PriceCalculate, HttpMethod::Post, "/api/pricing/calculate"),
        (Endpoint::ListStrategies, HttpMethod::Get, "/api/strategies"),
        (Endpoint::CreateStrategy, HttpMethod::Post, "/api/strategies"),
        (
            Endpoint::GetStrategy { id: "s-3".to_string() },
            HttpMethod::Get,
            "/api/strategies/s-3",
        ),
        (Endpoint::RunBacktest, HttpMethod::Post, "/api/backtest"),
        (Endpoint::BacktestHistory, HttpMethod::Get, "/api/backtest/history"),
        (Endpoint::Portfolio, HttpMethod::Get, "/api/portfolio"),
        (
            Endpoint::CreatePosition {
                product_id: "p-9".to_string(),
                quantity: 10.0,
                entry_price: 100_000.0,
            },
            HttpMethod::Post,
            "/api/portfolio/positions?productId=p-9&quantity=10&entryPrice=100000",
        ),
        (Endpoint::ListTrades, HttpMethod::Get, "/api/trades"),
        (Endpoint::BookTrade, HttpMethod::Post, "/api/trades/book"),
        (
            Endpoint::GetTrade { id: "t-7".to_string() },
            HttpMethod::Get,
            "/api/trades/t-7",
        ),
        (
            Endpoint::UpdateTradeStatus {
                id: "t-7".to_string(),
                status: TradeStatus::Settled,
            },
            HttpMethod::Put,
            "/api/trades/t-7/status?status=SETTLED",
        ),
        (
            Endpoint::TradeEvents {
                trade_id: "t-7".to_string(),
            },
            HttpMethod::Get,
            "/api/lifecycle/events/t-7",
        ),
        (
            Endpoint::ProcessFixings,
            HttpMethod::Post,
            "/api/lifecycle/process-fixings",
        ),
        (
            Endpoint::CheckBarriers,
            HttpMethod::Post,
            "/api/lifecycle/check-barriers",
        ),
        (Endpoint::GenerateReport, HttpMethod::Post, "/api/reports/generate"),
        (
            Endpoint::MarketData {
                symbol: "AAPL".to_string(),
                days: 30,
            },
            HttpMethod::Get,
            "/api/market-data/AAPL?days=30",
        ),
        (Endpoint::RiskMetrics, HttpMethod::Get, "/api/analytics/risk-metrics"),
    ];

    for (endpoint, method, path) in routes {
        assert_eq!(endpoint.method(), method, "method of {:?}", endpoint);
        assert_eq!(endpoint.path(), path, "path of {:?}", endpoint);
    }
}

#[test]
fn test_absolute_url_uses_config() {
    let cfg = ApiConfig::from_lookup(|key| match key {
        "API_BASE_URL" => Some("https://quant.example.com".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(
        Endpoint::market_data("GBP/USD").url(&cfg),
        "https://quant.example.com/api/market-data/GBP%2FUSD?days=252"
    );
}

#[test]
fn test_decode_login_response() {
    let body = r#"{
        "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig",
        "user": {
            "id": "u-1",
            "username": "pm",
            "email": "pm@example.com",
            "role": "portfolio_manager",
            "name": "Portfolio Manager"
        }
    }"#;
    let auth: AuthResponse = decode_response(200, body).unwrap();
    assert_eq!(auth.user.role, Role::PortfolioManager);
    assert!(auth.token.starts_with("eyJ"));
}

#[test]
fn test_unauthorized_is_typed() {
    let result: Result<AuthResponse, _> = decode_response(401, "{\"error\":\"expired\"}");
    assert_eq!(result.unwrap_err(), PayoffError::Unauthorized);
}

#[test]
fn test_server_error_keeps_status_and_body() {
    let result: Result<PricingResponse, _> = decode_response(503, "pricing engine down");
    match result {
        Err(PayoffError::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "pricing engine down");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[test]
fn test_missing_field_is_malformed() {
    // `user` is missing: must fail rather than produce a partial session
    let result: Result<AuthResponse, _> = decode_response(200, r#"{"token":"abc"}"#);
    assert!(matches!(result, Err(PayoffError::MalformedResponse { .. })));
}

#[test]
fn test_non_json_is_malformed() {
    let result: Result<PortfolioSummary, _> = decode_response(200, "<html>gateway</html>");
    assert!(matches!(result, Err(PayoffError::MalformedResponse { .. })));
}

#[test]
fn test_decode_pricing_response() {
    let body = r#"{
        "price": 52.3145,
        "greeks": {"delta": 0.0213, "gamma": -0.0004, "vega": 0.1812, "theta": -0.0051},
        "confidenceInterval": 0.3101,
        "numSimulations": 100000
    }"#;
    let pricing: PricingResponse = decode_response(200, body).unwrap();
    assert_eq!(pricing.price, 52.3145);
    assert_eq!(pricing.greeks.len(), 4);
    assert_eq!(pricing.greeks["delta"], 0.0213);
    assert_eq!(pricing.num_simulations, Some(100_000));
    assert_eq!(pricing.pricing_method, None);
}

#[test]
fn test_decode_trade_list() {
    let body = r#"[{
        "id": "t-1",
        "userId": "u-1",
        "productId": "p-1",
        "productName": "EUR/USD Digital Q1",
        "tradeType": "BUY",
        "status": "BOOKED",
        "notional": 100000,
        "entryPrice": 98.5,
        "currentPrice": null,
        "pnl": 0,
        "tradeDate": "2024-01-15T10:30:00",
        "settlementDate": null,
        "maturityDate": "2025-01-15T10:30:00",
        "notes": null
    }]"#;
    let trades: Vec<TradeResponse> = decode_response(200, body).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].trade_type, TradeType::Buy);
    assert_eq!(trades[0].status, TradeStatus::Booked);
    assert_eq!(trades[0].current_price, None);
    assert!(trades[0].trade_date.is_some());
}

#[test]
fn test_unknown_trade_status_rejected() {
    let body = r#"[{
        "id": "t-1", "userId": "u-1", "productId": "p-1",
        "tradeType": "BUY", "status": "EXPLODED",
        "notional": 1, "entryPrice": 1
    }]"#;
    let result: Result<Vec<TradeResponse>, _> = decode_response(200, body);
    assert!(matches!(result, Err(PayoffError::MalformedResponse { .. })));
}

#[test]
fn test_decode_portfolio_with_upper_case_product_kind() {
    let body = r#"{
        "summary": {
            "totalValue": 1050000.0,
            "totalInvestment": 1000000.0,
            "totalPnl": 50000.0,
            "pnlPercentage": 5.0,
            "positionCount": 1
        },
        "positions": [{
            "id": "pos-1",
            "productId": "p-9",
            "product": {
                "id": "p-9",
                "name": "SPY Barrier",
                "type": "BARRIER_OPTION",
                "underlyingAsset": "SPY"
            },
            "quantity": 10,
            "entryPrice": 100000,
            "currentValue": 1050000,
            "totalInvestment": 1000000,
            "unrealizedPnl": 50000
        }]
    }"#;
    let portfolio: PortfolioSummary = decode_response(200, body).unwrap();
    assert_eq!(portfolio.summary.position_count, 1);
    let product = portfolio.positions[0].product.as_ref().unwrap();
    assert_eq!(product.product_type, ProductKind::BarrierOption);
}

#[test]
fn test_decode_market_data_and_backtest() {
    let points: Vec<MarketDataPoint> = decode_response(
        200,
        r#"[{"date":"2024-03-01","open":1.08,"high":1.09,"low":1.07,"close":1.085,"volume":120000}]"#,
    )
    .unwrap();
    assert_eq!(points[0].date.to_string(), "2024-03-01");

    let backtest: BacktestResponse = decode_response(
        200,
        r#"{
            "id": "bt-1",
            "results": {
                "total_return": 0.15, "sharpe_ratio": "1.20", "max_drawdown": 0.07,
                "win_rate": 0.6, "total_trades": 10, "profitable_trades": 6,
                "final_value": 115000.0
            },
            "equityCurve": [{"date": "2024-01-02", "value": 100000.0}]
        }"#,
    )
    .unwrap();
    assert_eq!(backtest.results.sharpe_ratio, 1.2);
    assert_eq!(backtest.equity_curve.len(), 1);
}

#[test]
fn test_decode_risk_metrics() {
    let body = r#"{
        "var95": -0.0234,
        "var99": -0.0412,
        "beta": 1.12,
        "sharpeRatio": 1.45,
        "sortinoRatio": 1.89,
        "maxDrawdown": -0.156,
        "volatility": 0.187,
        "correlationSpy": 0.78
    }"#;
    let metrics: RiskMetrics = decode_response(200, body).unwrap();
    assert_eq!(metrics.var95, -0.0234);
    assert_eq!(metrics.var99, -0.0412);
    assert_eq!(metrics.sharpe_ratio, 1.45);
    assert_eq!(metrics.sortino_ratio, 1.89);
    assert_eq!(metrics.correlation_spy, 0.78);

    // snake_case keys are not what the analytics service sends
    let result: Result<RiskMetrics, _> = decode_response(
        200,
        r#"{"var_95":0,"var_99":0,"beta":0,"sharpe_ratio":0,"sortino_ratio":0,
            "max_drawdown":0,"volatility":0,"correlation_spy":0}"#,
    );
    assert!(matches!(result, Err(PayoffError::MalformedResponse { .. })));
}

#[test]
fn test_decode_lifecycle_events() {
    let body = r#"[
        {
            "id": "ev-1", "tradeId": "t-7", "productId": "p-9",
            "eventType": "FIXING", "eventDate": "2024-03-01T12:00:00",
            "underlyingPrice": 1.0921, "barrierLevel": null, "couponAmount": null,
            "status": "PROCESSED", "processedAt": "2024-03-01T12:00:02", "notes": null
        },
        {
            "id": "ev-2", "tradeId": "t-7", "productId": "p-9",
            "eventType": "COUPON_PAYMENT", "eventDate": "2024-06-01T12:00:00",
            "couponAmount": 8000.00, "status": "PENDING"
        }
    ]"#;
    let events: Vec<LifecycleEventResponse> = decode_response(200, body).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, LifecycleEventType::Fixing);
    assert_eq!(events[0].underlying_price, Some(1.0921));
    assert_eq!(events[1].event_type, LifecycleEventType::CouponPayment);
    assert_eq!(events[1].status, LifecycleEventStatus::Pending);
    assert_eq!(events[1].coupon_amount, Some(8000.0));
    assert_eq!(events[1].processed_at, None);
}

#[test]
fn test_user_profile_contract() {
    let profile: UserProfile = decode_response(
        200,
        r#"{
            "id": "up-1", "userId": "u-1", "firstName": "Ada", "lastName": "Lovelace",
            "phoneNumber": null, "company": "QuantCo", "department": "Rates",
            "riskTolerance": "MODERATE", "investmentExperience": "PROFESSIONAL",
            "createdAt": "2024-01-01T08:00:00", "updatedAt": "2024-02-01T08:00:00"
        }"#,
    )
    .unwrap();
    assert_eq!(profile.risk_tolerance, Some(RiskTolerance::Moderate));
    assert_eq!(
        profile.investment_experience,
        Some(InvestmentExperience::Professional)
    );

    let update = UserProfile {
        first_name: Some("Ada".to_string()),
        risk_tolerance: Some(RiskTolerance::Aggressive),
        ..Default::default()
    };
    let json: serde_json::Value = serde_json::from_str(&encode_request(&update).unwrap()).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["riskTolerance"], "AGGRESSIVE");
    assert!(json.get("userId").is_none());
    assert!(json.get("createdAt").is_none());
}

#[test]
fn test_encode_requests() {
    let login = encode_request(&LoginRequest {
        username: "trader".to_string(),
        password: "secret".to_string(),
    })
    .unwrap();
    assert_eq!(login, r#"{"username":"trader","password":"secret"}"#);

    let trade: serde_json::Value = serde_json::from_str(
        &encode_request(&TradeRequest {
            product_id: "p-1".to_string(),
            trade_type: TradeType::Sell,
            notional: 250_000.0,
            entry_price: 101.25,
            notes: None,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(trade["productId"], "p-1");
    assert_eq!(trade["tradeType"], "SELL");
    assert!(trade.get("notes").is_none());

    let report: serde_json::Value = serde_json::from_str(
        &encode_request(&ReportRequest {
            report_type: ReportType::Risk,
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            format: ReportFormat::Pdf,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(report["reportType"], "risk");
    assert_eq!(report["startDate"], "2024-01-01");
    assert_eq!(report["format"], "pdf");

    let register: serde_json::Value = serde_json::from_str(
        &encode_request(&RegisterRequest {
            username: "researcher1".to_string(),
            email: "r1@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::Researcher,
            name: "Research One".to_string(),
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(register["username"], "researcher1");
    assert_eq!(register["email"], "r1@example.com");
    assert_eq!(register["role"], "researcher");
    assert_eq!(register["name"], "Research One");

    let mut indicators = BTreeMap::new();
    indicators.insert("sma_period".to_string(), serde_json::json!(20));
    let strategy: serde_json::Value = serde_json::from_str(
        &encode_request(&StrategyRequest {
            name: "SMA crossover".to_string(),
            description: None,
            asset_list: vec!["AAPL".to_string(), "MSFT".to_string()],
            indicators,
            rules: BTreeMap::new(),
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(strategy["assetList"], serde_json::json!(["AAPL", "MSFT"]));
    assert_eq!(strategy["indicators"]["sma_period"], 20);
    assert!(strategy.get("asset_list").is_none());

    let backtest: serde_json::Value = serde_json::from_str(
        &encode_request(&BacktestRequest {
            strategy_id: "s-3".to_string(),
            symbol: "AAPL".to_string(),
            start_date: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            initial_capital: 100_000.0,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(backtest["strategyId"], "s-3");
    assert_eq!(backtest["startDate"], "2023-01-01");
    assert_eq!(backtest["endDate"], "2023-12-31");
    assert_eq!(backtest["initialCapital"], 100_000.0);
}

#[test]
fn test_product_request_from_draft() {
    let draft = ProductDraft {
        name: "  EUR/USD Digital Option Q1 2024 ".to_string(),
        ..Default::default()
    };
    let request = draft.to_request().unwrap();
    let json: serde_json::Value = serde_json::from_str(&encode_request(&request).unwrap()).unwrap();
    assert_eq!(json["name"], "EUR/USD Digital Option Q1 2024");
    assert_eq!(json["type"], "digital_option");
    assert_eq!(json["underlyingAsset"], "EUR/USD");
    assert_eq!(json["maturityMonths"], 12);
    assert_eq!(json["issuer"], "Dealer 1");

    let unnamed = ProductDraft::default();
    assert!(unnamed.to_request().is_err());
}
