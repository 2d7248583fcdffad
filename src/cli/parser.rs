use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for harvestgraph
/// CLI application to turn a time-tracking export into graph nodes and edges
#[derive(Parser, Debug)]
#[command(
    name = "harvestgraph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a time-tracking CSV export into time-windowed graph nodes and edges",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List configuration keys left at their default")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Build the node and edge files from a time-tracking export
    Build {
        /// CSV export with Client, Project, First Name, Last Name, Date, Hours columns
        #[arg(value_name = "INPUT")]
        input: String,

        #[arg(long, value_name = "FILE", help = "Nodes output file")]
        nodes: Option<String>,

        #[arg(long, value_name = "FILE", help = "Edges output file")]
        edges: Option<String>,

        #[arg(
            long,
            short = 'p',
            help = "Add project nodes, project-level interaction edges and project→client edges"
        )]
        projects: bool,

        #[arg(
            long = "plain-labels",
            conflicts_with = "anonymize",
            help = "Use full client/project names and 'First L.' person labels"
        )]
        plain_labels: bool,

        #[arg(long, help = "Abbreviate client/project names and use person initials")]
        anonymize: bool,

        #[arg(
            long,
            value_name = "MARKER",
            help = "Drop records whose client contains MARKER (case-insensitive)"
        )]
        exclude: Option<String>,

        #[arg(
            long = "window-days",
            value_name = "DAYS",
            conflicts_with = "window_fraction",
            help = "Fixed window width in days"
        )]
        window_days: Option<u32>,

        #[arg(
            long = "window-fraction",
            value_name = "K",
            help = "Window width as (last date - first date) / K"
        )]
        window_fraction: Option<u32>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite existing output files")]
        force: bool,
    },
}
