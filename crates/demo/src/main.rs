// File: crates/demo/src/main.rs
// Summary: Demo computes time axis ticks from a JSON options file and an optional series CSV.
// Usage: time-axis-demo <options.json> [series.csv] [--json]

use anyhow::{Context, Result};
use std::path::Path;
use time_axis_core::{AxisOptions, RawTime, Series, TimeAxis};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let mut paths = args.iter().filter(|a| !a.starts_with("--"));

    let options = match paths.next() {
        Some(p) => load_options(Path::new(p))?,
        None => {
            println!("No options file given; using automatic time axis defaults.");
            AxisOptions::time()
        }
    };

    let mut axis = TimeAxis::new(options);
    if let Some(p) = paths.next() {
        let path = Path::new(p);
        let series = load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {} points from {}", series.len(), path.display());
        axis = axis.with_series(&series);
    }

    match axis.extent() {
        Some(e) => println!("Extent: [{}, {}]", fmt_ms(e.min()), fmt_ms(e.max())),
        None => println!("Extent: empty (no bounds, no data)"),
    }

    let ticks = axis.get_ticks();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&ticks)?);
        return Ok(());
    }
    println!("{} ticks", ticks.len());
    for t in &ticks {
        println!(
            "  {}  level={:<2} upper={:<10} lower={}",
            fmt_ms(t.value),
            t.time.level,
            t.time.upper_time_unit,
            t.time.lower_time_unit
        );
    }
    Ok(())
}

fn load_options(path: &Path) -> Result<AxisOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts = AxisOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(opts)
}

/// Load a `time,value` CSV. The time column accepts epoch ms or date strings.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "date", "datetime"]).unwrap_or(0);
    let i_value = idx(&["value", "close", "y"]).unwrap_or(1);

    let mut raw = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(t) = rec.get(i_time).map(str::trim) else { continue };
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
        raw.push((RawTime::from(t), value));
    }
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    Ok(Series::from_raw(name, raw))
}

fn fmt_ms(t: i64) -> String {
    chrono::DateTime::from_timestamp_millis(t)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| t.to_string())
}
