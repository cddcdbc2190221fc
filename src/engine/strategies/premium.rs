use super::types::FeeStrategy;
use crate::engine::types::PREMIUM_RATE;

#[derive(Debug, Default)]
pub struct PremiumFee;

impl FeeStrategy for PremiumFee {
    fn tier(&self) -> &'static str {
        "PREMIUM"
    }

    fn rate(&self) -> f64 {
        PREMIUM_RATE
    }
}
