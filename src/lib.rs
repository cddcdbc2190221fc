pub mod engine;

pub use engine::fees::{FeeCalculator, FeeQuote};
pub use engine::types::Tier;
