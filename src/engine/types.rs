use serde::{Deserialize, Serialize};

// Rate multipliers, fixed for the life of the process.
pub const VIP_RATE: f64 = 0.1;
pub const PREMIUM_RATE: f64 = 0.2;
pub const NORMAL_RATE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Vip,
    Premium,
    Normal,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Vip, Tier::Premium, Tier::Normal];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Vip => "VIP",
            Tier::Premium => "PREMIUM",
            Tier::Normal => "NORMAL",
        }
    }

    /// Exact-label lookup. Labels are case-sensitive; anything else is an
    /// unrecognized tier, which is a normal input here, not an error.
    pub fn parse(s: &str) -> Option<Tier> {
        match s {
            "VIP" => Some(Tier::Vip),
            "PREMIUM" => Some(Tier::Premium),
            "NORMAL" => Some(Tier::Normal),
            _ => None,
        }
    }

    pub fn rate(self) -> f64 {
        match self {
            Tier::Vip => VIP_RATE,
            Tier::Premium => PREMIUM_RATE,
            Tier::Normal => NORMAL_RATE,
        }
    }

    /// Each variant carries its own computation. The amount is taken as-is,
    /// negative values included.
    pub fn fee(self, amount: f64) -> f64 {
        amount * self.rate()
    }
}
