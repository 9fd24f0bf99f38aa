// src/payoff/curve.rs
use crate::payoff::payoffs::payoff_at;
use crate::products::ProductConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// First relative spot of the sweep, in percent of strike
pub const RELATIVE_SPOT_START_PCT: u32 = 80;
/// Last relative spot of the sweep (inclusive), in percent of strike
pub const RELATIVE_SPOT_END_PCT: u32 = 130;
/// Number of samples on every curve
pub const CURVE_SAMPLES: usize = (RELATIVE_SPOT_END_PCT - RELATIVE_SPOT_START_PCT + 1) as usize;

/// One point of a payoff diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffSample {
    pub spot: f64,
    pub payoff: f64,
}

/// Relative spot levels of the sweep: 0.80, 0.81, ..., 1.30
///
/// Built from an integer percent so that the 1.00 point is exact and the
/// last sample is never lost to accumulated rounding.
pub fn relative_spot_grid() -> impl Iterator<Item = f64> {
    (RELATIVE_SPOT_START_PCT..=RELATIVE_SPOT_END_PCT).map(|pct| pct as f64 / 100.0)
}

/// Payoff diagram of `config` across ±30% around the strike
///
/// # Algorithm
///
/// For each relative level `x` of [`relative_spot_grid`]:
/// ```text
/// spot   = K · x
/// payoff = payoff_at(config, spot)
/// ```
///
/// Samples are emitted in increasing `x`, hence increasing spot whenever
/// `K > 0`. Degenerate inputs (zero or negative strike) still yield 51
/// samples; they are simply meaningless. Nothing is cached: each call
/// recomputes the full curve.
pub fn generate_payoff_curve(config: &ProductConfig) -> Vec<PayoffSample> {
    let mut samples = Vec::with_capacity(CURVE_SAMPLES);
    for relative_spot in relative_spot_grid() {
        let spot = config.strike * relative_spot;
        samples.push(PayoffSample {
            spot,
            payoff: payoff_at(config, spot),
        });
    }

    debug!(
        payoff_type = ?config.payoff_type,
        strike = config.strike,
        samples = samples.len(),
        "generated payoff curve"
    );
    samples
}

/// Payoff diagrams for many products, computed in parallel
///
/// Output order matches input order and every curve is bit-identical to
/// what [`generate_payoff_curve`] returns for the same config.
pub fn generate_payoff_curves(configs: &[ProductConfig]) -> Vec<Vec<PayoffSample>> {
    configs.par_iter().map(generate_payoff_curve).collect()
}

/// Headline figures of a payoff diagram
///
/// A sample counts as paying when its payoff is strictly positive. Curves of
/// a negative notional or coupon therefore report no paying samples and a
/// `max_payoff` of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub samples: usize,
    pub paying_samples: usize,
    pub max_payoff: f64,
    /// Lowest sampled spot with a positive payoff
    pub first_paying_spot: Option<f64>,
}

impl CurveSummary {
    pub fn from_samples(samples: &[PayoffSample]) -> Self {
        let paying: Vec<&PayoffSample> = samples.iter().filter(|s| s.payoff > 0.0).collect();
        CurveSummary {
            samples: samples.len(),
            paying_samples: paying.len(),
            max_payoff: samples.iter().map(|s| s.payoff).fold(0.0, f64::max),
            first_paying_spot: paying.first().map(|s| s.spot),
        }
    }
}
