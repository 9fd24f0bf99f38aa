//! # structured-payoff: Payoff Diagrams for Structured Products
//!
//! A Rust library behind the product creator of a structured-products
//! dashboard: it turns a product configuration into the payoff diagram shown
//! next to the form, and describes the backend HTTP contract as typed data.
//!
//! ## Key Features
//!
//! - **Payoff curves**: digital and barrier payoffs swept over 80%–130% of strike
//! - **Batch generation**: many curves in parallel with Rayon
//! - **Product model**: form defaults, save validation, maturity dates
//! - **Typed backend contract**: endpoint table and validated response schemas
//!
//! ## Quick Start
//!
//! ```rust
//! use structured_payoff::payoff::{generate_payoff_curve, CurveSummary};
//! use structured_payoff::products::ProductDraft;
//!
//! // Default form: EUR/USD digital, strike 1.10, 8% coupon on 100k
//! let draft = ProductDraft::default();
//! let config = draft.to_config().expect("digital options have a payoff rule");
//!
//! let curve = generate_payoff_curve(&config);
//! let summary = CurveSummary::from_samples(&curve);
//! assert_eq!(curve.len(), 51);
//! println!("Pays {:.2} above spot {:?}", summary.max_payoff, summary.first_paying_spot);
//! ```
//!
//! ## Model
//!
//! Payoffs are binary and terminal: `notional * coupon` or nothing. The
//! barrier rule checks the barrier against the same terminal spot as the
//! strike, which is a visualization proxy, not a path-dependent pricer.
//! Authoritative prices come from the backend pricing engine.

// Module declarations
pub mod api;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod payoff;
pub mod products;

// Re-export commonly used types for convenience
pub use error::{PayoffError, PayoffResult};
pub use payoff::{generate_payoff_curve, PayoffSample};
pub use products::{PayoffType, ProductConfig};
