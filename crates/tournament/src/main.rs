//! Tournament CLI
//!
//! Run matches between checkers engines.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use checkers_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-checkers Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D]");
    println!("                   [--max-moves M] [--config FILE] [--output FILE]");
    println!();
    println!("Engines:");
    println!("  minimax       - Minimax with alpha-beta and material eval");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Random with a fixed seed");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20 --depth 3");
    println!("  tournament match minimax minimax --config match.toml --output report.json");
}

fn create_engine(spec: &str) -> anyhow::Result<Box<dyn Engine>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" | "mm" => Ok(Box::new(MinimaxEngine::new())),
        "random" | "rand" => match parts.get(1) {
            Some(seed) => {
                let seed = seed
                    .parse()
                    .with_context(|| format!("Invalid seed in engine spec: {spec}"))?;
                Ok(Box::new(RandomEngine::seeded(seed)))
            }
            None => Ok(Box::new(RandomEngine::new())),
        },
        _ => bail!("Unknown engine: {spec}"),
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} expects a value"))
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // The config file is the base layer; flags override it
    let mut config = MatchConfig::default();
    let mut games: Option<u32> = None;
    let mut depth: Option<u8> = None;
    let mut max_moves: Option<u32> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                games = Some(flag_value(args, i, "--games")?.parse().context("--games")?);
                i += 1;
            }
            "--depth" | "-d" => {
                depth = Some(flag_value(args, i, "--depth")?.parse().context("--depth")?);
                i += 1;
            }
            "--max-moves" | "-m" => {
                max_moves = Some(
                    flag_value(args, i, "--max-moves")?
                        .parse()
                        .context("--max-moves")?,
                );
                i += 1;
            }
            "--config" | "-c" => {
                config = MatchConfig::load(&PathBuf::from(flag_value(args, i, "--config")?))?;
                i += 1;
            }
            "--output" | "-o" => {
                output = Some(PathBuf::from(flag_value(args, i, "--output")?));
                i += 1;
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 1;
    }

    if let Some(n) = games {
        config.num_games = n;
    }
    if let Some(d) = depth {
        config.depth = d;
    }
    if let Some(m) = max_moves {
        config.max_moves = m;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Max plies: {}",
        config.num_games, config.depth, config.max_moves
    );
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let report = MatchReport::new(engine1_spec, engine2_spec, config, result);
    report.print_report();

    if let Some(path) = output {
        report.save(&path)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            bail!("Unknown command: {}", args[1])
        }
    }
}
