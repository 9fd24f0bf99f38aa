pub mod curve;
pub mod payoffs;

pub use curve::{generate_payoff_curve, generate_payoff_curves, CurveSummary, PayoffSample};
pub use payoffs::{payoff_at, PayoffConditions};
