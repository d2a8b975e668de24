//! HedgingDesk Demo CLI
//!
//! Prices a configured European call scenario on the binomial lattice and
//! logs the stock tree, the value tree, and the per-node hedge book. When a
//! report path is configured, the full pricing report is also written as
//! JSON.

mod config;

use std::path::Path;

use anyhow::{Context, Result};
use lattice_pricing::engine::{BinomialPricer, PricingReport, PricingRequest};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ScenarioConfig;

const CONFIG_PATH: &str = "demo/hedging_desk/scenario.toml";

fn main() -> Result<()> {
    // Load configuration before logging so the log level can come from it.
    let config = ScenarioConfig::load_or_default(Path::new(CONFIG_PATH)).with_env_overrides();
    config.validate().context("invalid scenario configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("hedging_desk={}", config.log_level).parse()?),
        )
        .init();

    tracing::info!("HedgingDesk Demo Starting...");
    tracing::info!(
        spot = config.spot,
        strike = config.strike,
        up = config.up,
        down = config.down,
        rate = config.rate,
        periods = config.periods,
        "Scenario loaded"
    );

    let request = PricingRequest::builder()
        .spot(config.spot)
        .strike(config.strike)
        .up(config.up)
        .down(config.down)
        .rate(config.rate)
        .periods(config.periods)
        .build()
        .context("scenario rejected by the pricing engine")?;

    let report = BinomialPricer::new(request)
        .price()
        .context("pricing failed")?;

    log_report(&report);

    if let Some(path) = &config.report_path {
        let json =
            serde_json::to_string_pretty(&report).context("serialising pricing report")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing pricing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Pricing report written");
    }

    tracing::info!("HedgingDesk Demo Complete");

    Ok(())
}

/// Log every triangle of the report: stock prices, claim values, hedges.
fn log_report(report: &PricingReport<f64>) {
    for (period, level) in report.stock.levels().iter().enumerate() {
        tracing::info!(period, prices = ?level, "Stock level");
    }
    for (period, level) in report.values.levels().iter().enumerate() {
        tracing::info!(period, values = ?level, "Value level");
    }

    tracing::info!(
        price = report.price,
        up_weight = report.up_weight,
        "Fair value at time zero (up_weight is the q side value, not used by the recursion)"
    );

    for period in 0..report.holdings.periods() {
        for index in 0..=period {
            // Indices stay in range for every interior node.
            if let Some(hedge) = report.holdings.node(period, index) {
                tracing::info!(
                    period,
                    node = index,
                    bonds = hedge.bond_units,
                    shares = hedge.stock_units,
                    "Hedge"
                );
            }
        }
    }
}
