use crate::export::ExportFormat;
use crate::models::ChangeStatus;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for racetable
#[derive(Parser)]
#[command(
    name = "racetable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render race result tables with elapsed times and pending change annotations",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Debug-level diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    #[command(group(
        ArgGroup::new("action")
            .required(true)
            .args(["print_config", "edit_config"])
    ))]
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", requires = "edit_config", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Render records into a results table and overlay pending changes
    Render {
        #[arg(long, value_name = "FILE", help = "Table descriptor (YAML or JSON)")]
        table: String,

        #[arg(long, value_name = "FILE", help = "JSON array of records")]
        records: String,

        #[arg(long, value_name = "FILE", help = "JSON array of changes to overlay")]
        changes: Option<String>,

        #[arg(long, value_enum, requires = "changes", help = "Only overlay changes in this state")]
        status: Option<ChangeStatus>,

        #[arg(long, value_name = "TIMESTAMP", help = "Reference time, overrides the descriptor's start00")]
        start00: Option<String>,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,

        #[arg(long, help = "No ANSI styling in text output")]
        plain: bool,
    },

    /// Print the elapsed time between two timestamps as m:ss
    Elapsed {
        from: String,

        to: String,

        #[arg(long, help = "Show milliseconds (m:ss.mmm)")]
        ms: bool,

        #[arg(long = "utc-offset", value_name = "+HH:MM", help = "Offset for timestamps without zone")]
        utc_offset: Option<String>,
    },
}
