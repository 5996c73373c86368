use bytewise_cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    bytewise_cli::run(Cli::parse())
}
