use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use triad_eval::cli::{Cli, Commands};
use triad_eval::io;
use triad_eval::math::stats;
use triad_eval::{eval, gen};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => {
            run_eval(&args.a, &args.b, &args.c, None, args.json.as_deref())?;
        }
        Commands::Gen(args) => {
            let (a, b, c) = gen::generate(args.size, args.min, args.max, args.seed)?;
            print_triple(&a, &b, &c);
            run_eval(&a, &b, &c, Some(args.seed), args.json.as_deref())?;
        }
        Commands::Demo(args) => {
            run_demo(args.seed)?;
        }
    }

    Ok(())
}

fn run_eval(
    a: &[i64],
    b: &[i64],
    c: &[i64],
    seed: Option<u64>,
    json: Option<&Path>,
) -> Result<()> {
    let start = Instant::now();
    let outcomes = eval::evaluate(a, b, c)?;
    let summary = stats::summarize(&outcomes);
    info!(
        n = outcomes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "evaluation finished"
    );

    print!("{}", io::summary::format_summary(&outcomes, &summary));

    if let Some(path) = json {
        let report = io::json_writer::build_report(a.len(), seed, &outcomes, &summary);
        io::json_writer::write_json(path, &report)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn run_demo(seed: u64) -> Result<()> {
    let fixed: [(&str, Vec<i64>, Vec<i64>, Vec<i64>); 2] = [
        (
            "all indices match",
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![5, 7, 9],
        ),
        (
            "partial match",
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 6, 7],
        ),
    ];

    for (name, a, b, c) in &fixed {
        println!("== {} ==", name);
        print_triple(a, b, c);
        run_eval(a, b, c, None, None)?;
        println!();
    }

    println!("== generated data ==");
    let (a, b, c) = gen::generate(3, 1, 10, seed)?;
    print_triple(&a, &b, &c);
    run_eval(&a, &b, &c, Some(seed), None)?;

    Ok(())
}

fn print_triple(a: &[i64], b: &[i64], c: &[i64]) {
    println!("a: {:?}", a);
    println!("b: {:?}", b);
    println!("c: {:?}", c);
}
