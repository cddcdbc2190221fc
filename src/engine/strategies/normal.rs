use super::types::FeeStrategy;
use crate::engine::types::NORMAL_RATE;

#[derive(Debug, Default)]
pub struct NormalFee;

impl FeeStrategy for NormalFee {
    fn tier(&self) -> &'static str {
        "NORMAL"
    }

    fn rate(&self) -> f64 {
        NORMAL_RATE
    }
}
