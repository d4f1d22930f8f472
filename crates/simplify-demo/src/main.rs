// File: crates/simplify-demo/src/main.rs
// Summary: Demo loads a CSV of named value columns, simplifies each series and writes the renderer-ready result.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use simplify_core::{ComposeOptions, Point, Quality, RenderSeries, Series, SeriesComposer, SimplifyOptions};
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: simplify-demo [file.csv] [tolerance] [fast|precise|off]";
const TIME_COLUMNS: &[&str] = &["time", "timestamp", "open_time", "date", "datetime", "x"];

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let compose_opts = compose_options(&args, |k| std::env::var(k).ok())?;
    match &compose_opts.simplify {
        Some(o) => println!("Simplifying with tolerance {} ({})", o.tolerance, o.quality),
        None => println!("Simplification off; series are forwarded unchanged"),
    }

    let (series, out_path) = match args.first() {
        Some(raw) => {
            let path = resolve_path(raw)?;
            println!("Using input file: {}", path.display());
            let series = load_series_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (series, out_name_with(&path))
        }
        None => {
            println!("No input file given; using synthetic waveforms");
            (synthetic_series(), out_name_with(Path::new("synthetic.csv")))
        }
    };
    if series.is_empty() {
        anyhow::bail!("no value columns loaded; check headers/delimiter.");
    }

    let before: Vec<(String, usize)> = series.iter().map(|s| (s.name.clone(), s.len())).collect();
    let rendered = SeriesComposer::new(compose_opts)
        .compose(series)
        .context("simplification rejected the input")?;

    for ((name, n), r) in before.iter().zip(&rendered) {
        println!("  {:<24} {:>8} -> {:>8} points  {}", name, n, r.data.len(), r.color.to_hex());
    }

    write_render_csv(&out_path, &rendered)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;
    println!("Wrote {}", out_path.display());
    Ok(())
}

/// Build the session options from positional args, falling back to
/// `SIMPLIFY_TOLERANCE` / `SIMPLIFY_QUALITY` when an argument is absent.
fn compose_options(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<ComposeOptions> {
    let defaults = SimplifyOptions::default();
    let quality_raw = args.get(2).cloned().or_else(|| env("SIMPLIFY_QUALITY"));
    let quality = match quality_raw.as_deref().map(str::trim) {
        Some(q) if q.eq_ignore_ascii_case("off") => return Ok(ComposeOptions::passthrough()),
        Some(q) => q.parse::<Quality>().with_context(|| USAGE.to_string())?,
        None => defaults.quality,
    };
    let tol_raw = args.get(1).cloned().or_else(|| env("SIMPLIFY_TOLERANCE"));
    let tolerance = match tol_raw {
        Some(t) => t.trim().parse::<f64>().with_context(|| format!("invalid tolerance '{t}'\n{USAGE}"))?,
        None => defaults.tolerance,
    };
    let opts = SimplifyOptions::new(tolerance).with_quality(quality);
    opts.validate()?;
    Ok(ComposeOptions::simplified(opts))
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/simplified_<stem>.csv
fn out_name_with(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("simplified_{}.csv", stem));
    out
}

/// Load a CSV with an optional time/x column and one series per remaining column.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    debug!("headers: {:?}", headers);

    let i_time = headers.iter().position(|h| TIME_COLUMNS.contains(&h.to_lowercase().as_str()));
    let value_cols: Vec<usize> = (0..headers.len()).filter(|&i| Some(i) != i_time).collect();
    if i_time.is_none() {
        warn!("no time column found; using row index as x");
    }

    let mut points: Vec<Vec<Point>> = vec![Vec::new(); value_cols.len()];
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let x = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_f64)
            .unwrap_or(row as f64);
        for (slot, &col) in value_cols.iter().enumerate() {
            match rec.get(col).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite()) {
                Some(y) => points[slot].push(Point::new(x, y)),
                None => skipped += 1,
            }
        }
    }
    if skipped > 0 {
        warn!("skipped {} empty or non-numeric cells", skipped);
    }

    Ok(value_cols
        .iter()
        .zip(points)
        .filter(|(_, p)| !p.is_empty())
        .map(|(&col, p)| Series::new(headers[col].clone(), p))
        .collect())
}

fn write_render_csv(path: &Path, rendered: &[RenderSeries]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["series", "color", "x", "y"])?;
    for r in rendered {
        let color = r.color.to_hex();
        for p in &r.data {
            let (x, y) = (p.x.to_string(), p.y.to_string());
            w.write_record([r.name.as_str(), color.as_str(), x.as_str(), y.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Parse a timestamp cell to seconds: epoch seconds/milliseconds, plain numbers,
/// RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`.
fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        } // epoch ms -> sec
        return Some(n as f64);
    }
    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64 / 1000.0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp() as f64);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp() as f64)
}

fn synthetic_series() -> Vec<Series> {
    let n = 20_000usize;
    let wave = (0..n)
        .map(|i| Point::new(i as f64, (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001))
        .collect();
    let flat = (0..n)
        .map(|i| Point::new(i as f64, 50.0 + ((i * 7919) % 13) as f64 * 0.005))
        .collect();
    let steps = (0..n)
        .map(|i| Point::new(i as f64, ((i / 2_500) % 3) as f64 * 20.0))
        .collect();
    vec![Series::new("wave", wave), Series::new("flat", flat), Series::new("steps", steps)]
}
