#![warn(rust_2018_idioms)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

use mahjong_round::app::{PlayApp, PlayArgs, SimApp, SimArgs};

/// Single-round four-player mahjong against policy-driven opponents
#[derive(Debug, Parser)]
#[command(name = "mahjong_round")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play seat 0 interactively in the terminal
    Play(PlayArgs),
    /// Run rounds with every seat driven by an actor and print statistics
    Sim(SimArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mahjong_round::util::log::init(cli.log_level)?;

    match cli.command {
        Commands::Play(args) => PlayApp::new(args).run(),
        Commands::Sim(args) => SimApp::new(args).run().map(|_| ()),
    }
}
