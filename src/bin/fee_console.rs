use anyhow::{Context, Result};
use tier_fee_engine::engine::fees::{fee_by_branch, fee_by_tier, FeeCalculator};
use tracing::info;

const DEMO_TIERS: &[&str] = &["VIP", "PREMIUM", "NORMAL"];
const DEMO_AMOUNT: f64 = 100.0;

#[derive(Debug, Clone)]
struct RunConfig {
    amount: f64,
    tiers: Vec<String>,
}

impl RunConfig {
    fn from_env() -> Result<Self> {
        let amount = match std::env::var("FEE_AMOUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid FEE_AMOUNT '{raw}', expected a number"))?,
            Err(_) => DEMO_AMOUNT,
        };

        let tiers = std::env::var("FEE_TIERS")
            .ok()
            .map(|s| parse_tier_list(&s))
            .filter(|tiers| !tiers.is_empty())
            .unwrap_or_else(|| DEMO_TIERS.iter().map(|s| s.to_string()).collect());

        Ok(Self { amount, tiers })
    }
}

// Format: "VIP,PREMIUM,NORMAL". Entries are probed as-is; an entry the fee
// table does not know simply quotes 0, so nothing here is rejected.
fn parse_tier_list(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|s| s.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cfg = RunConfig::from_env()?;
    let calculator = FeeCalculator::new();

    for tier in &cfg.tiers {
        let quote = calculator.quote(tier, cfg.amount);
        info!(
            tier = %quote.tier,
            amount = quote.amount,
            rate = quote.rate,
            by_branch = fee_by_branch(tier, cfg.amount),
            by_tier = fee_by_tier(tier, cfg.amount),
            by_book = quote.fee,
            "fee quoted"
        );
        println!("{}", serde_json::to_string(&quote)?);
    }

    // A tier the table does not know quotes 0 rather than failing.
    let miss = calculator.quote("UNKNOWN", cfg.amount);
    info!(tier = %miss.tier, amount = miss.amount, fee = miss.fee, "unrecognized tier");
    println!("{}", serde_json::to_string(&miss)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tier_list() {
        assert_eq!(
            parse_tier_list("VIP, PREMIUM,NORMAL"),
            vec!["VIP", "PREMIUM", "NORMAL"]
        );
        assert_eq!(parse_tier_list("'VIP', \"GOLD\""), vec!["VIP", "GOLD"]);
        assert!(parse_tier_list(" , ,").is_empty());
    }

    #[test]
    fn unknown_entries_are_kept_for_probing() {
        // the console quotes them as 0 instead of rejecting the list
        assert_eq!(parse_tier_list("VIP,UNKNOWN"), vec!["VIP", "UNKNOWN"]);
    }
}
