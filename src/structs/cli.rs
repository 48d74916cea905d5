use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "repo-analyzer")]
#[clap(about = "Multi-perspective AI analysis of git repositories", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.repo-analyzer/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
