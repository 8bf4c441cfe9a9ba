//! tajweed - color-coded tajweed annotation for Qur'anic Arabic text

use clap::Parser;
use tajweed_cli::commands::Commands;

/// Tajweed rule detection over Arabic verse text
#[derive(Debug, Parser)]
#[command(name = "tajweed", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }
}
