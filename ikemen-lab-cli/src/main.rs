//! ikemen-lab CLI
//!
//! Command-line interface for inspecting and classifying content for
//! IKEMEN GO and other MUGEN-derived engines.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ikemen_lab_lib::{ContentContext, ContentKind};

mod commands;
mod error;

use commands::config::run_config;
use commands::info::run_info;
use commands::list::run_list;
use commands::portrait::run_portrait;
use commands::scan::run_scan;
pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "ikemen-lab")]
#[command(about = "Inspect and classify content for MUGEN-derived engines", long_about = None)]
struct Cli {
    /// Library root containing content folders (defaults to the saved
    /// root, then the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Common arguments for commands that walk content folders.
#[derive(Args, Clone)]
struct ScanFilterArgs {
    /// Content kinds or folder aliases (e.g. chars,stages)
    #[arg(short, long, value_delimiter = ',')]
    kinds: Option<Vec<ContentKind>>,

    /// Maximum number of entries to process per folder
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the library and classify every content entry
    Scan {
        /// Quick mode: read directory metadata only, skip pixel decoding
        #[arg(short, long)]
        quick: bool,

        #[command(flatten)]
        filter: ScanFilterArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Identify a single definition or sprite file
    Info {
        path: PathBuf,

        /// Quick mode: skip pixel decoding
        #[arg(short, long)]
        quick: bool,
    },

    /// Extract a sprite from an SFF container as PNG
    Portrait {
        path: PathBuf,

        /// Sprite group (defaults to the portrait group, 9000)
        #[arg(short, long)]
        group: Option<u16>,

        /// Item within the group
        #[arg(short, long)]
        item: Option<u16>,

        /// Output file (defaults to the input with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered analyzers and content kinds
    List,

    /// Manage the saved library root
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Save a library root
    SetRoot { path: PathBuf },
    /// Remove the saved library root
    ClearRoot,
    /// Print the settings file path
    Path,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let ctx = ContentContext::with_default_analyzers();

    let result = match cli.command {
        Commands::Scan {
            quick,
            filter,
            json,
        } => run_scan(&ctx, cli.root, quick, filter.kinds, filter.limit, json),
        Commands::Info { path, quick } => run_info(&ctx, &path, quick),
        Commands::Portrait {
            path,
            group,
            item,
            output,
        } => run_portrait(&path, group, item, output),
        Commands::List => run_list(&ctx),
        Commands::Config { action } => run_config(action),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
