//! Selection runner
//!
//! Reads a JSON selection request (`kind`, `profile`, `teamPicks`,
//! `propPicks`, `insights`), runs it through the allocation engine with limits
//! from the environment, and prints the selection as JSON on stdout.
//!
//! ```text
//! pick_allocation request.json
//! SELECTION_REQUEST_PATH=request.json pick_allocation
//! ```

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pick_allocation::logging::{self, LogConfig};
use pick_allocation::{AllocationConfig, SelectionEngine, SelectionRequest};

fn main() -> Result<()> {
    // Load .env before any config/logging initialization
    dotenvy::dotenv().ok();

    let log_config = LogConfig::from_env();
    let _log_guard = logging::init_logging(&log_config);

    let root_span = info_span!("pick_allocation", run_id = %log_config.run_id);
    let _enter = root_span.enter();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SELECTION_REQUEST_PATH").ok())
        .context("Usage: pick_allocation <request.json> (or set SELECTION_REQUEST_PATH)")?;

    let config = AllocationConfig::from_env();
    info!(
        picks_quota = ?(config.picks.free_quota, config.picks.pro_quota, config.picks.elite_quota),
        insights_quota = ?(config.insights.free_quota, config.insights.pro_quota, config.insights.elite_quota),
        "Allocation limits loaded"
    );

    let request = SelectionRequest::load_from(&path)?;
    info!(
        path = %path,
        kind = request.kind.noun(),
        tier = ?request.profile.tier,
        "Request loaded"
    );

    let result = request.run(&SelectionEngine::new(config));
    info!(
        total = result.total_allocated,
        fallback_used = result.fallback_used,
        sports = ?result.distribution.keys().collect::<Vec<_>>(),
        "Selection complete"
    );

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize selection")?;
    println!("{}", json);

    Ok(())
}
