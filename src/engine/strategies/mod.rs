//! Per-tier fee strategies and the book that dispatches to them.
//!
//! Adding a tier means adding one strategy module and listing it in
//! `builtin_strategies`; the dispatch path and the existing strategies stay
//! untouched. The book is built once at first use and is read-only after
//! that, so it can be shared across threads freely.

mod normal;
mod premium;
mod types;
mod vip;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use normal::NormalFee;
pub use premium::PremiumFee;
pub use types::FeeStrategy;
pub use vip::VipFee;

fn builtin_strategies() -> Vec<Box<dyn FeeStrategy + Send + Sync>> {
    vec![Box::new(VipFee), Box::new(PremiumFee), Box::new(NormalFee)]
}

/// Immutable tier → strategy table, keyed by the tier each strategy reports
/// for itself.
pub struct StrategyBook {
    by_tier: HashMap<&'static str, Box<dyn FeeStrategy + Send + Sync>>,
}

impl StrategyBook {
    pub fn with_builtins() -> Self {
        let mut by_tier = HashMap::new();
        for strategy in builtin_strategies() {
            by_tier.insert(strategy.tier(), strategy);
        }
        Self { by_tier }
    }

    pub fn strategy_for(&self, tier: &str) -> Option<&(dyn FeeStrategy + Send + Sync)> {
        self.by_tier.get(tier).map(|s| s.as_ref())
    }

    pub fn rate(&self, tier: &str) -> Option<f64> {
        self.strategy_for(tier).map(|s| s.rate())
    }

    /// Unknown tiers quote 0. The default branch is part of the contract:
    /// lookups never fail.
    pub fn fee(&self, tier: &str, amount: f64) -> f64 {
        self.strategy_for(tier).map(|s| s.fee(amount)).unwrap_or(0.0)
    }

    pub fn tiers(&self) -> Vec<&'static str> {
        let mut tiers: Vec<_> = self.by_tier.keys().copied().collect();
        tiers.sort_unstable();
        tiers
    }

    pub fn len(&self) -> usize {
        self.by_tier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tier.is_empty()
    }
}

/// Process-wide book, built on first use and alive for the process lifetime.
pub fn book() -> &'static StrategyBook {
    static BOOK: OnceLock<StrategyBook> = OnceLock::new();
    BOOK.get_or_init(StrategyBook::with_builtins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_covers_exactly_the_builtin_tiers() {
        let book = StrategyBook::with_builtins();
        assert_eq!(book.tiers(), vec!["NORMAL", "PREMIUM", "VIP"]);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn strategies_key_themselves() {
        let book = StrategyBook::with_builtins();
        for tier in book.tiers() {
            let strategy = book.strategy_for(tier).unwrap();
            assert_eq!(strategy.tier(), tier);
        }
    }

    #[test]
    fn book_quotes_canonical_fees() {
        let book = StrategyBook::with_builtins();
        assert_eq!(book.fee("VIP", 100.0), 10.0);
        assert_eq!(book.fee("PREMIUM", 100.0), 20.0);
        assert_eq!(book.fee("NORMAL", 100.0), 30.0);
    }

    #[test]
    fn missing_tier_quotes_zero() {
        let book = StrategyBook::with_builtins();
        assert_eq!(book.fee("UNKNOWN", 100.0), 0.0);
        assert_eq!(book.rate("UNKNOWN"), None);
        assert!(book.strategy_for("vip").is_none());
    }

    #[test]
    fn global_book_is_shared() {
        assert!(std::ptr::eq(book(), book()));
    }
}
