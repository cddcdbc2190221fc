pub mod fees;
pub mod strategies;
pub mod types;
