//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use tajweed_core::RuleKind;

pub mod annotate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate Arabic text with tajweed rule spans
    Annotate(annotate::AnnotateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the rule table (kind, tier, color key)
    Rules,

    /// List available output formats
    Formats,

    /// List supported script variants
    Scripts,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(self) -> Result<()> {
        match self {
            ListCommands::Rules => {
                println!("{:<24} {:<5} {}", "rule", "tier", "color key");
                for kind in RuleKind::ALL {
                    println!("{:<24} {:<5} {}", kind.name(), kind.tier(), kind.color_key());
                }
            }
            ListCommands::Formats => {
                println!("text - one span per line with offsets");
                println!("json - JSON array of documents with spans");
                println!("html - color-painted HTML preview");
            }
            ListCommands::Scripts => {
                println!("uthmani - Uthmani orthography (default)");
                println!("simple  - Simple (Imlaei) orthography");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_execute() {
        ListCommands::Rules.execute().unwrap();
        ListCommands::Formats.execute().unwrap();
        ListCommands::Scripts.execute().unwrap();
    }
}
