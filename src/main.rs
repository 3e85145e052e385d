//! CLI entry point for sq

use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{ArgAction, Parser, ValueEnum};
use superquick::{
    MatchCriteria, OutputConfig, OutputFormat, Printer, SearchError, SearchOptions, SizeRange,
    SkipSet, SortKey, TimeRange, WalkPolicy, parse_size, resolve_root, search,
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
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sq")]
#[command(about = "Recursively search for files by extension and/or filename substring")]
#[command(version)]
struct Args {
    /// Root directory to search (default: current directory). Example: "~/Documents/Github"
    root: Option<PathBuf>,

    /// Substring in filename (case-insensitive)
    #[arg(short = 's', long = "substring")]
    substring: Option<String>,

    /// File extension, with or without the dot (e.g. xlsx)
    #[arg(short = 'e', long = "ext")]
    ext: Option<String>,

    /// Minimum file size (e.g. 10MB, 5g, 1.5k)
    #[arg(long = "min-size", value_name = "SIZE")]
    min_size: Option<String>,

    /// Maximum file size (e.g. 500MB)
    #[arg(long = "max-size", value_name = "SIZE")]
    max_size: Option<String>,

    /// Only files modified within DURATION (e.g. 30m, 7d, 2w)
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only files modified longer than DURATION ago
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Print absolute paths
    #[arg(long = "absolute", overrides_with = "relative")]
    absolute: bool,

    /// Print paths relative to the root (default)
    #[arg(long = "relative", overrides_with = "absolute")]
    relative: bool,

    /// Only print the number of matches
    #[arg(short = 'c', long = "count-only")]
    count_only: bool,

    /// Follow symlinks into linked directories
    #[arg(long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Include hidden files and directories
    #[arg(long = "include-hidden", overrides_with = "ignore_hidden")]
    include_hidden: bool,

    /// Ignore hidden files and directories (default)
    #[arg(long = "ignore-hidden", overrides_with = "include_hidden")]
    ignore_hidden: bool,

    /// Do not skip heavy dirs like .git and node_modules
    #[arg(long = "no-skip")]
    no_skip: bool,

    /// Also skip directories with this name or glob (can be used multiple times)
    #[arg(long = "skip", value_name = "NAME")]
    skip: Vec<String>,

    /// Render output as a table
    #[arg(long = "table", conflicts_with_all = ["csv", "json"])]
    table: bool,

    /// Output CSV to stdout
    #[arg(long = "csv", conflicts_with = "json")]
    csv: bool,

    /// Output JSON to stdout
    #[arg(long = "json")]
    json: bool,

    /// Sort by: path, size, mtime (anything else sorts by path)
    #[arg(long = "sort", default_value = "path")]
    sort: String,

    /// Limit printed matches (zero or negative prints none)
    #[arg(short = 'n', long = "limit", allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn output_format(&self) -> OutputFormat {
        if self.count_only {
            OutputFormat::Count
        } else if self.csv {
            OutputFormat::Csv
        } else if self.json {
            OutputFormat::Json
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Lines
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn parse_size_flag(flag: &'static str, value: Option<&str>) -> Result<Option<u64>, SearchError> {
    parse_size(value).map_err(|source| SearchError::Size { flag, source })
}

/// Parse a duration like "1h", "7d", "2w" and turn it into the instant that
/// long ago.
fn parse_age_flag(
    flag: &'static str,
    value: Option<&str>,
) -> Result<Option<SystemTime>, SearchError> {
    let Some(input) = value else {
        return Ok(None);
    };
    let invalid = |message: String| SearchError::Duration {
        flag,
        input: input.to_string(),
        message,
    };
    let duration: Duration =
        humantime::parse_duration(input.trim()).map_err(|e| invalid(e.to_string()))?;
    SystemTime::now()
        .checked_sub(duration)
        .map(Some)
        .ok_or_else(|| invalid("too far in the past".to_string()))
}

fn build_options(args: &Args) -> Result<SearchOptions, SearchError> {
    let size = SizeRange::new(
        parse_size_flag("--min-size", args.min_size.as_deref())?,
        parse_size_flag("--max-size", args.max_size.as_deref())?,
    );
    let modified = TimeRange {
        newer_than: parse_age_flag("--newer", args.newer.as_deref())?,
        older_than: parse_age_flag("--older", args.older.as_deref())?,
    };

    let base = if args.no_skip {
        SkipSet::empty()
    } else {
        SkipSet::defaults()
    };
    let skip_dirs = args.skip.iter().fold(base, |set, entry| set.with_entry(entry));

    Ok(SearchOptions {
        policy: WalkPolicy {
            follow_symlinks: args.follow_symlinks,
            ignore_hidden: args.ignore_hidden || !args.include_hidden,
            skip_dirs,
        },
        criteria: MatchCriteria::new()
            .with_substring(args.substring.as_deref())
            .with_extension(args.ext.as_deref())
            .with_size(size)
            .with_modified(modified),
        sort: SortKey::parse_lenient(&args.sort),
        limit: args.limit,
        absolute: args.absolute && !args.relative,
    })
}

/// Accept `sq search [ROOT] ...` as a synonym for `sq [ROOT] ...`.
///
/// A root directory literally named `search` has to be written `./search`.
fn strip_search_command<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if args.get(1).is_some_and(|arg| arg == "search") {
        args.remove(1);
    }
    args
}

fn main() {
    let args = Args::parse_from(strip_search_command(std::env::args_os()));
    init_logging(args.verbose);

    // Argument validation happens before any traversal
    let options = build_options(&args).unwrap_or_else(|e| {
        eprintln!("sq: {}", e);
        process::exit(1);
    });
    let root = resolve_root(args.root.as_deref()).unwrap_or_else(|e| {
        eprintln!("sq: {}", e);
        process::exit(1);
    });

    let outcome = search(&root, &options);

    let mut printer = Printer::new(OutputConfig {
        format: args.output_format(),
        use_color: should_use_color(args.color),
    });
    if let Err(e) = printer.print(&outcome, &root) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("sq: error writing output: {}", e);
        process::exit(1);
    }
}
