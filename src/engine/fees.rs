//! Fee quoting by customer tier.
//!
//! Rates are fixed at startup: VIP 10%, PREMIUM 20%, NORMAL 30%. A tier the
//! table does not know quotes 0 rather than failing. The same function is
//! exposed three ways (branch dispatch, enum dispatch, strategy book) so the
//! dispatch styles can be compared side by side; they agree on every input.

use serde::Serialize;

use super::strategies::{self, StrategyBook};
use super::types::{Tier, NORMAL_RATE, PREMIUM_RATE, VIP_RATE};

/// Branch dispatch over the raw tier label. Grows one arm per tier.
pub fn fee_by_branch(tier: &str, amount: f64) -> f64 {
    match tier {
        "VIP" => amount * VIP_RATE,
        "PREMIUM" => amount * PREMIUM_RATE,
        "NORMAL" => amount * NORMAL_RATE,
        _ => 0.0,
    }
}

/// Enum dispatch: parse the label, let the variant compute. The zero
/// default lives at the parse boundary.
pub fn fee_by_tier(tier: &str, amount: f64) -> f64 {
    Tier::parse(tier).map(|t| t.fee(amount)).unwrap_or(0.0)
}

/// One computed quote, shaped for the console's JSONL output.
#[derive(Debug, Clone, Serialize)]
pub struct FeeQuote {
    pub tier: String,
    pub amount: f64,
    pub rate: f64,
    pub fee: f64,
}

/// The public fee component, backed by the process-wide strategy book.
#[derive(Clone, Copy)]
pub struct FeeCalculator {
    book: &'static StrategyBook,
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeeCalculator {
    pub fn new() -> Self {
        Self {
            book: strategies::book(),
        }
    }

    /// `amount * rate(tier)`; an unrecognized tier quotes 0, silently.
    pub fn calculate(&self, tier: &str, amount: f64) -> f64 {
        self.book.fee(tier, amount)
    }

    pub fn quote(&self, tier: &str, amount: f64) -> FeeQuote {
        let rate = self.book.rate(tier).unwrap_or(0.0);
        FeeQuote {
            tier: tier.to_string(),
            amount,
            rate,
            fee: amount * rate,
        }
    }
}
