use super::types::FeeStrategy;
use crate::engine::types::VIP_RATE;

#[derive(Debug, Default)]
pub struct VipFee;

impl FeeStrategy for VipFee {
    fn tier(&self) -> &'static str {
        "VIP"
    }

    fn rate(&self) -> f64 {
        VIP_RATE
    }
}
