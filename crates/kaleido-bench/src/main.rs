use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use kaleido_lexer::{lex, without_spaces};
use kaleido_parser::parse_expression;
use kaleido_printer::render;
use kaleido_syntax::error::Result;

#[derive(Parser, Debug)]
#[command(name = "kaleido-bench", about = "Time the Kaleido lexer, parser and printer")]
struct Cli {
    /// Specific case(s) to run (by name, e.g. flat_add). If omitted, runs all cases.
    #[arg(short = 'c', long = "case", action = ArgAction::Append)]
    cases: Vec<String>,

    /// Iterations per case (measured)
    #[arg(short = 'n', long = "iterations", default_value_t = 10)]
    iterations: u32,

    /// Warmup iterations (not measured)
    #[arg(short = 'w', long = "warmup", default_value_t = 2)]
    warmup: u32,

    /// Number of operands in each generated expression
    #[arg(short = 's', long = "size", default_value_t = 1000)]
    size: usize,

    /// Output JSON file path; default: bench-results/<timestamp>.json
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// List available cases and exit
    #[arg(long = "list", default_value_t = false)]
    list: bool,
}

#[derive(Debug, Serialize)]
struct BenchResult {
    name: String,
    iterations: u32,
    source_chars: usize,
    tokens: usize,
    avg_total_ms: f64,
    min_total_ms: f64,
    max_total_ms: f64,
    avg_lex_ms: f64,
    avg_parse_ms: f64,
    avg_render_ms: f64,
}

#[derive(Debug, Serialize)]
struct OutputDoc {
    timestamp: String,
    kaleido_version: String,
    size: usize,
    benchmarks: Vec<BenchResult>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stages {
    /// Lex, parse and render
    Full,
    /// Source is not a single expression; time the lexer only
    LexOnly,
}

#[derive(Debug, Clone)]
struct BenchCase {
    name: &'static str,
    source: String,
    stages: Stages,
}

fn operands(n: usize) -> impl Iterator<Item = String> {
    (1..=n.max(1)).map(|i| (i % 1000).to_string())
}

fn join_with_ops(n: usize, ops: &[&str]) -> String {
    let mut out = String::new();
    for (i, operand) in operands(n).enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(ops[(i - 1) % ops.len()]);
            out.push(' ');
        }
        out.push_str(&operand);
    }
    out
}

fn generate_cases(size: usize) -> Vec<BenchCase> {
    let multiline = "def f x1\n  extern 12 + @y3 # z, 'q'.\n".repeat(size.max(1));
    vec![
        BenchCase {
            name: "flat_add",
            source: join_with_ops(size, &["+"]),
            stages: Stages::Full,
        },
        BenchCase {
            name: "mixed",
            source: join_with_ops(size, &["+", "*"]),
            stages: Stages::Full,
        },
        BenchCase {
            name: "comparisons",
            source: join_with_ops(size, &["<", "-", ">", "*", "=", "+"]),
            stages: Stages::Full,
        },
        BenchCase {
            name: "multiline",
            source: multiline,
            stages: Stages::LexOnly,
        },
    ]
}

#[derive(Debug, Default)]
struct Samples {
    totals: Vec<f64>,
    lexes: Vec<f64>,
    parses: Vec<f64>,
    renders: Vec<f64>,
    tokens: usize,
}

fn run_once(case: &BenchCase, samples: Option<&mut Samples>) -> Result<()> {
    let t0 = Instant::now();

    let mut t = Instant::now();
    let tokens: Vec<_> = lex(&case.source).collect();
    let t_lex = t.elapsed();
    let token_count = tokens.len();

    let (t_parse, t_render) = match case.stages {
        Stages::LexOnly => (Duration::ZERO, Duration::ZERO),
        Stages::Full => {
            t = Instant::now();
            let node = parse_expression(without_spaces(tokens))?;
            let t_parse = t.elapsed();

            t = Instant::now();
            let text = render(&node)?;
            let t_render = t.elapsed();
            tracing::trace!(case = case.name, chars = text.len(), "rendered");
            (t_parse, t_render)
        }
    };

    let total = t0.elapsed();

    if let Some(s) = samples {
        s.lexes.push(dur_ms(t_lex));
        s.parses.push(dur_ms(t_parse));
        s.renders.push(dur_ms(t_render));
        s.totals.push(dur_ms(total));
        s.tokens = token_count;
    }
    Ok(())
}

fn measure_case(case: &BenchCase, iterations: u32, warmup: u32) -> Result<Samples> {
    for _ in 0..warmup {
        run_once(case, None)?;
    }
    let mut samples = Samples {
        totals: Vec::with_capacity(iterations as usize),
        lexes: Vec::with_capacity(iterations as usize),
        parses: Vec::with_capacity(iterations as usize),
        renders: Vec::with_capacity(iterations as usize),
        tokens: 0,
    };
    for _ in 0..iterations {
        run_once(case, Some(&mut samples))?;
    }
    Ok(samples)
}

fn dur_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn stats(vals: &[f64]) -> (f64, f64, f64) {
    if vals.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = vals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg = vals.iter().sum::<f64>() / (vals.len() as f64);
    (avg, min, max)
}

fn write_report(path: &Path, doc: &OutputDoc) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KALEIDO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cases = generate_cases(cli.size);

    if cli.list {
        println!("Available cases:");
        for c in &cases {
            println!("- {} ({} chars)", c.name, c.source.chars().count());
        }
        return;
    }

    if !cli.cases.is_empty() {
        let wanted: std::collections::HashSet<_> = cli.cases.iter().map(|s| s.to_lowercase()).collect();
        cases.retain(|c| wanted.contains(c.name));
        if cases.is_empty() {
            eprintln!("No matching cases. Use --list to see available.");
            std::process::exit(2);
        }
    }

    let mut results = Vec::new();

    for case in &cases {
        let samples = match measure_case(case, cli.iterations, cli.warmup) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {}", case.name, e);
                std::process::exit(1);
            }
        };
        let (avg_t, min_t, max_t) = stats(&samples.totals);
        let (avg_l, _, _) = stats(&samples.lexes);
        let (avg_p, _, _) = stats(&samples.parses);
        let (avg_r, _, _) = stats(&samples.renders);

        println!(
            "{:>12}: total avg={:.3}ms min={:.3}ms max={:.3}ms | lex={:.3}ms parse={:.3}ms render={:.3}ms | tokens={}",
            case.name, avg_t, min_t, max_t, avg_l, avg_p, avg_r, samples.tokens
        );

        results.push(BenchResult {
            name: case.name.to_string(),
            iterations: cli.iterations,
            source_chars: case.source.chars().count(),
            tokens: samples.tokens,
            avg_total_ms: avg_t,
            min_total_ms: min_t,
            max_total_ms: max_t,
            avg_lex_ms: avg_l,
            avg_parse_ms: avg_p,
            avg_render_ms: avg_r,
        });
    }

    let out_path = cli.output.clone().unwrap_or_else(|| {
        // Windows-safe filename timestamp
        let ts_file = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%SZ").to_string();
        PathBuf::from("bench-results").join(format!("{}.json", ts_file))
    });

    let doc = OutputDoc {
        timestamp: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        kaleido_version: env!("CARGO_PKG_VERSION").to_string(),
        size: cli.size,
        benchmarks: results,
    };

    if let Err(e) = write_report(&out_path, &doc) {
        eprintln!("Failed to write {}: {}", out_path.display(), e);
        std::process::exit(1);
    }

    println!("\nSaved results to {}", out_path.display());
}
