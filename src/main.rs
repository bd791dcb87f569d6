//! CLI entry point for seqfind

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use seqfind::{
    DedupMode, DetectorConfig, OutputConfig, TableFormatter, TraversalOrder, WalkerConfig,
    find_sequences, print_json, validate_root,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// How files already attributed to a sequence are skipped
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum DedupArg {
    /// Skip files whose path holds a found base name and its extension
    #[default]
    Contains,
    /// Skip only files that are members of a found sequence
    Exact,
}

impl From<DedupArg> for DedupMode {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Contains => DedupMode::Containment,
            DedupArg::Exact => DedupMode::Exact,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "seqfind")]
#[command(about = "Tool for searching sequences of files")]
#[command(version)]
struct Args {
    /// Path to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Use depth-first search (default)
    #[arg(long = "dfs", conflicts_with = "bfs")]
    dfs: bool,

    /// Use breadth-first search
    #[arg(long = "bfs")]
    bfs: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Do not descend into symlinked directories
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// How files already covered by a sequence are recognized
    #[arg(long = "dedup", value_name = "MODE", default_value = "contains")]
    dedup: DedupArg,

    /// Number of parallel workers for detection
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the number of sequences and frames after the table
    #[arg(long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = validate_root(&args.path) {
        eprintln!("seqfind: {}", e);
        process::exit(1);
    }

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // Drop interior "." components so reported paths stay clean
    let root: PathBuf = root.components().collect();

    let order = if args.bfs && !args.dfs {
        TraversalOrder::BreadthFirst
    } else {
        TraversalOrder::DepthFirst
    };

    let walker_config = WalkerConfig {
        order,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        follow_symlinks: !args.no_follow,
    };

    let detector_config = DetectorConfig {
        dedup: args.dedup.into(),
        ignore_patterns: args.ignore.clone(),
        parallel_workers: args.jobs,
    };

    let sequences = find_sequences(&root, &walker_config, &detector_config);
    log::info!("found {} sequences", sequences.len());

    let result = if args.json {
        print_json(&sequences)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_summary: args.summary,
            relative_to: Some(root),
        };
        TableFormatter::new(output_config).print(&sequences)
    };

    if let Err(e) = result {
        eprintln!("seqfind: error writing output: {}", e);
        process::exit(1);
    }
}
