// scripts/benchmark.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structured_payoff::math_utils::Timer;
use structured_payoff::output::{write_payoff_curve_to_csv, write_summary_to_csv};
use structured_payoff::payoff::{generate_payoff_curve, generate_payoff_curves, CurveSummary};
use structured_payoff::products::{ProductConfig, ProductDraft};
use std::env;
use std::fs::File;
use std::io::{self, Write};

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    curves: usize,
    time_ms: f64,
    throughput_curves_per_sec: f64,
    paying_samples: usize,
}

/// Random but reproducible product book around EUR/USD-like levels
fn random_configs(count: usize, seed: u64) -> Vec<ProductConfig> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let strike = rng.gen_range(0.8..1.6);
            let notional = rng.gen_range(10..=500) as f64 * 1_000.0;
            let coupon = rng.gen_range(0.01..0.20);
            if rng.gen_bool(0.5) {
                ProductConfig::digital(strike, notional, coupon)
            } else {
                let barrier = strike * rng.gen_range(0.9..1.2);
                ProductConfig::barrier(strike, barrier, notional, coupon)
            }
        })
        .collect()
}

fn run_curve_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &count in &[1_000, 10_000, 100_000] {
        println!("Running benchmarks with {} curves...", count);
        let configs = random_configs(count, 42);

        let mut timer = Timer::new();
        timer.start();
        let sequential: Vec<_> = configs.iter().map(generate_payoff_curve).collect();
        let time_ms = timer.elapsed_ms();
        results.push(BenchmarkResult {
            name: "Payoff curves (sequential)".to_string(),
            curves: count,
            time_ms,
            throughput_curves_per_sec: count as f64 / (time_ms / 1000.0),
            paying_samples: count_paying(&sequential),
        });

        timer.start();
        let parallel = generate_payoff_curves(&configs);
        let time_ms = timer.elapsed_ms();
        results.push(BenchmarkResult {
            name: "Payoff curves (rayon)".to_string(),
            curves: count,
            time_ms,
            throughput_curves_per_sec: count as f64 / (time_ms / 1000.0),
            paying_samples: count_paying(&parallel),
        });

        if sequential != parallel {
            eprintln!("WARNING: parallel curves differ from sequential curves");
        }
    }

    results
}

fn count_paying(curves: &[Vec<structured_payoff::PayoffSample>]) -> usize {
    curves
        .iter()
        .map(|curve| CurveSummary::from_samples(curve).paying_samples)
        .sum()
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Curves,Time_ms,Throughput_curves_per_sec,Paying_samples")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{}",
            result.name,
            result.curves,
            result.time_ms,
            result.throughput_curves_per_sec,
            result.paying_samples
        )?;
    }

    println!("Results written to {}", filename);
    Ok(())
}

fn main() -> io::Result<()> {
    println!("structured-payoff Benchmark Suite");
    println!("=================================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_curve_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<30} {:>10} {:>12} {:>15} {:>10}",
        "Benchmark", "Curves", "Time (ms)", "Curves/sec", "Paying"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<30} {:>10} {:>12.2} {:>15.0} {:>10}",
            result.name,
            result.curves,
            result.time_ms,
            result.throughput_curves_per_sec,
            result.paying_samples
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    write_results_to_csv(&results, &system_info, &format!("benchmark_results_{}.csv", timestamp))?;

    // Reference curve for the default product form
    let draft = ProductDraft::default();
    if let Ok(config) = draft.to_config() {
        let curve = generate_payoff_curve(&config);
        write_payoff_curve_to_csv("default_payoff_curve.csv", &config, &curve)?;
        write_summary_to_csv(
            "default_payoff_summary.csv",
            &CurveSummary::from_samples(&curve),
        )?;
        println!("Default product curve written to default_payoff_curve.csv");
    }

    println!("\nBenchmark complete!");
    Ok(())
}
