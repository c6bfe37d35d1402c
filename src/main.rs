//! One-shot analysis of a snapshot file
//!
//! Usage: `fxregime <snapshot.json> <symbol> <price> [timeframe]`

use fxregime::config::EngineConfig;
use fxregime::core::scanner::DEFAULT_TIMEFRAME;
use fxregime::logging;
use fxregime::models::snapshot::IndicatorSnapshot;
use fxregime::signals::engine::AnalysisPipeline;
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        return Err("usage: fxregime <snapshot.json> <symbol> <price> [timeframe]".into());
    }

    let raw = fs::read_to_string(&args[0])?;
    let snapshot: IndicatorSnapshot = serde_json::from_str(&raw)?;
    let price: f64 = args[2]
        .parse()
        .map_err(|e| format!("invalid price '{}': {}", args[2], e))?;
    let timeframe = args.get(3).map(String::as_str).unwrap_or(DEFAULT_TIMEFRAME);

    let config = EngineConfig::from_env()?;
    let pipeline = AnalysisPipeline::new(&config)?;
    let analysis = pipeline.analyze(&snapshot, price, &args[1], timeframe)?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
