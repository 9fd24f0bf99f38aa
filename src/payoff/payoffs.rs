//! Terminal Payoff Rules
//!
//! # Definitions
//!
//! Both supported products are binary: they pay a fixed amount `N·c`
//! (notional times coupon) or nothing.
//!
//! - **Digital**: `N·c · 1{S > K}`
//! - **Barrier**: `N·c · 1{S > H} · 1{S > K}`
//!
//! # Implementation Notes
//!
//! The barrier rule compares the barrier against the same terminal spot as
//! the strike. There is no path monitoring, so this is a terminal proxy for
//! the barrier payoff, good enough for a payoff diagram but not a pricing
//! model. Path-dependent barrier pricing lives in the backend pricing engine.
//!
//! Each rule is expressed as the set of [`PayoffConditions`] it requires; a
//! spot pays when the conditions it satisfies contain the required set.

use crate::products::{PayoffType, ProductConfig};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PayoffConditions: u8 {
        const NONE          = 0;
        const ABOVE_STRIKE  = 1 << 0;
        const ABOVE_BARRIER = 1 << 1;
    }
}

impl PayoffConditions {
    /// Conditions a spot level satisfies for the given product.
    ///
    /// Both comparisons are strict: a spot equal to the strike does not pay.
    pub fn satisfied_at(config: &ProductConfig, spot: f64) -> Self {
        let mut met = PayoffConditions::NONE;
        if spot > config.strike {
            met |= PayoffConditions::ABOVE_STRIKE;
        }
        if spot > config.barrier {
            met |= PayoffConditions::ABOVE_BARRIER;
        }
        met
    }
}

impl PayoffType {
    /// Conditions that must all hold for the product to pay
    pub fn required_conditions(&self) -> PayoffConditions {
        match self {
            PayoffType::DigitalOption => PayoffConditions::ABOVE_STRIKE,
            PayoffType::BarrierOption => {
                PayoffConditions::ABOVE_STRIKE | PayoffConditions::ABOVE_BARRIER
            }
        }
    }
}

/// Terminal payoff of `config` at a single spot level
///
/// Returns either `0.0` or `notional * coupon`. Total over all inputs; NaN
/// comparisons are false, so a NaN spot never pays.
pub fn payoff_at(config: &ProductConfig, spot: f64) -> f64 {
    let required = config.payoff_type.required_conditions();
    if PayoffConditions::satisfied_at(config, spot).contains(required) {
        config.payout()
    } else {
        0.0
    }
}
