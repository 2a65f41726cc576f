use std::env;
use std::hint::black_box;
use std::time::Instant;

use rain_trap::utils::{naive_trapped_water, random_terrain};
use rain_trap::{trap_scan, Strategy, TrapStrategy};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 1024, 2048, 16_384, 131_072, 1_048_576, 8_388_608];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trap_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Trapped Rain Water Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every strategy runs on the same random terrain per size (heights in [0, {})).", options.max_height);
    eprintln!("  • Correctness: sizes up to {} are checked against the quadratic definition,", options.verify_limit);
    eprintln!("    larger sizes against the scan strategy");
    eprintln!("  • wall_us: wall-clock time in microseconds (lower is better)");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB around the call");
    eprintln!();

    let mut sys = System::new();
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut measurements = Vec::new();

    let total = SIZES.len();
    for (idx, &len) in SIZES.iter().enumerate() {
        eprintln!("[{}/{}] terrain of {} cells", idx + 1, total, len);
        let terrain = random_terrain(&mut rng, len, options.max_height);
        let (expected, reference) = if len <= options.verify_limit {
            (naive_trapped_water(&terrain), "naive")
        } else {
            (trap_scan(&terrain), "scan")
        };
        for strategy in Strategy::ALL {
            let m = measure(strategy, &terrain, &mut sys, expected, reference);
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
            };
            eprintln!(
                "      {} {:<12} water={} time={:.1}us",
                status_icon, m.strategy, m.water, m.wall_us
            );
            measurements.push(m);
        }
    }
    eprintln!();

    let failed = print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("trap_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    seed: u64,
    max_height: i64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;
        let mut seed = 42u64;
        let mut max_height = 99_999i64;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--format" => format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => {
                    verify_limit = value("--verify-limit")?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a non-negative integer".to_string())?
                }
                "--seed" => {
                    seed = value("--seed")?
                        .parse::<u64>()
                        .map_err(|_| "seed must be an unsigned integer".to_string())?
                }
                "--max-height" => {
                    max_height = value("--max-height")?
                        .parse::<i64>()
                        .ok()
                        .filter(|&h| h > 0)
                        .ok_or_else(|| "max height must be a positive integer".to_string())?
                }
                other => return Err(format!("unrecognized argument '{other}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            seed,
            max_height,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin trap_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest terrain checked against the quadratic definition (default: 2048)
  --seed <N>                    Seed for terrain generation (default: 42)
  --max-height <N>              Heights are drawn from [0, N) (default: 99999)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin trap_probe
  cargo run --release --bin trap_probe -- --format table --seed 7
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    strategy: &'static str,
    cells: usize,
    water: u64,
    wall_us: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn measure(
    strategy: Strategy,
    terrain: &[i64],
    sys: &mut System,
    expected: u64,
    reference: &str,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let water = black_box(strategy.trapped_water(black_box(terrain)));
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (verification_status, verification_detail) = if water == expected {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected} ({reference}), got {water}")),
        )
    };

    Measurement {
        strategy: strategy.name(),
        cells: terrain.len(),
        water,
        wall_us: duration.as_secs_f64() * 1e6,
        rss_delta_kib: after.saturating_sub(before),
        verification_status,
        verification_detail,
    }
}

/// Prints per-strategy statistics and returns the number of failures.
fn print_summary(measurements: &[Measurement]) -> usize {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let failed: Vec<&Measurement> = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .collect();
    eprintln!("  Runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {}", measurements.len() - failed.len());
    eprintln!("  ✗ Failed: {}", failed.len());
    for m in &failed {
        eprintln!(
            "     {} (cells={}): {}",
            m.strategy,
            m.cells,
            m.verification_detail.as_deref().unwrap_or("")
        );
    }
    eprintln!();

    for strategy in Strategy::ALL {
        let ms: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.strategy == strategy.name())
            .collect();
        let (Some(first), Some(last)) = (ms.first(), ms.last()) else {
            continue;
        };
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        let ns_per_cell = if last.cells > 0 {
            last.wall_us * 1e3 / last.cells as f64
        } else {
            0.0
        };
        eprintln!("  {}:", strategy);
        eprintln!(
            "    Time: {:.1}us at {} cells, {:.1}us at {} cells ({:.3} ns/cell)",
            first.wall_us, first.cells, last.wall_us, last.cells, ns_per_cell
        );
        eprintln!("    Memory: max_delta={} KiB", max_mem);
    }
    eprintln!("{}", "=".repeat(80));
    if failed.is_empty() {
        eprintln!("✓ All strategies agree on every terrain.");
    } else {
        eprintln!("✗ {} run(s) disagreed. Please review the errors above.", failed.len());
    }
    eprintln!();
    failed.len()
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("strategy,cells,water,wall_us,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.1},{},{},\"{}\"",
            m.strategy,
            m.cells,
            m.water,
            m.wall_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.strategy.len())
        .fold("strategy".len(), usize::max);

    println!(
        "{:<col1$}  {:>10}  {:>16}  {:>12}  {:>14}  {:>8}  {}",
        "strategy",
        "cells",
        "water",
        "wall_us",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1
    );
    println!(
        "{:-<col1$}  {:-<10}  {:-<16}  {:-<12}  {:-<14}  {:-<8}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>10}  {:>16}  {:>12.1}  {:>14}  {:>8}  {}",
            m.strategy,
            m.cells,
            m.water,
            m.wall_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
            col1 = col1
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"strategy\":\"{}\",\"cells\":{},\"water\":{},\"wall_us\":{:.1},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.cells,
            m.water,
            m.wall_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        // sysinfo reports bytes
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}
