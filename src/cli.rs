use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "triad-eval", version, about = "Triple-sum power evaluation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Eval(EvalArgs),
    Gen(GenArgs),
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    #[arg(long, value_delimiter = ',', num_args = 1.., help = "First array, comma separated")]
    pub a: Vec<i64>,

    #[arg(long, value_delimiter = ',', num_args = 1.., help = "Second array, comma separated")]
    pub b: Vec<i64>,

    #[arg(long, value_delimiter = ',', num_args = 1.., help = "Third array, comma separated")]
    pub c: Vec<i64>,

    #[arg(long, help = "Write a JSON report to this path")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GenArgs {
    #[arg(long, default_value_t = 5, help = "Number of elements per array")]
    pub size: usize,

    #[arg(long, default_value_t = 1)]
    pub min: i64,

    #[arg(long, default_value_t = 10)]
    pub max: i64,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, help = "Write a JSON report to this path")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
