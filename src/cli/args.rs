//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, export::ExportArgs, formats::FormatsArgs,
};

#[derive(Parser)]
#[command(name = "tabkit")]
#[command(author, version, about = "Column state and tabular export toolkit")]
#[command(
    long_about = "A toolkit for data tables: stable column visibility/order reconciliation and multi-format export (csv, json, txt, html, xml, xlsx, pdf)."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export tabular data from a CSV/JSON file to a download format
    Export(ExportArgs),

    /// List supported export formats
    Formats(FormatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
