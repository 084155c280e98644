//! CLI entry point for dirmap

use std::path::{Component, Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use dirmap::logging::init_logging;
use dirmap::output::{DEFAULT_HEADING, DEFAULT_TITLE};
use dirmap::{DiagnosticKind, RenderStyle, ReportConfig, ScanConfig, TreeBuilder, write_reports};

/// Marker style for the markdown report
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StyleArg {
    /// Emoji markers with bold directories and code-formatted files
    #[default]
    Markdown,
    /// Bracketed `[dir]` / `[file]` markers
    Plain,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Markdown => RenderStyle::Markdown,
            StyleArg::Plain => RenderStyle::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Write a project's directory layout as JSON and a markdown listing")]
#[command(version)]
struct Args {
    /// Project directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory receiving the reports (default: <PATH>/doc)
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Title line of the markdown report
    #[arg(long = "title", default_value = DEFAULT_TITLE)]
    title: String,

    /// Section heading above the listing
    #[arg(long = "heading", default_value = DEFAULT_HEADING)]
    heading: String,

    /// Marker style for the markdown report
    #[arg(long = "style", value_name = "STYLE", default_value = "markdown")]
    style: StyleArg,

    /// Also skip entries with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Suppress progress output (scan diagnostics are still logged)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Make `path` absolute against `cwd`, dropping `.` components.
fn resolve_root(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(&args.path, &cwd);

    let mut scan_config = ScanConfig::default();
    for name in &args.exclude {
        scan_config = scan_config.with_excluded_name(name.as_str());
    }
    if let Some(depth) = args.max_depth {
        scan_config = scan_config.with_max_depth(depth);
    }

    let mut report_config = ReportConfig::for_root(&root);
    if let Some(dir) = &args.output_dir {
        report_config.output_dir = dir.clone();
    }
    report_config.title = args.title.clone();
    report_config.heading = args.heading.clone();
    report_config.style = args.style.into();

    if !args.quiet {
        println!("Scanning {}...", root.display());
    }

    let scan = match TreeBuilder::new(scan_config).scan(&root) {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }
    };

    let paths = match write_reports(&scan.root, &report_config) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }
    };

    if args.quiet {
        return;
    }

    println!("Done.");
    let unreadable = scan
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UnreadableDirectory)
        .count();
    let skipped = scan.diagnostics.len() - unreadable;
    if unreadable > 0 {
        println!(
            "{} could not be read",
            plural(unreadable, "directory", "directories")
        );
    }
    if skipped > 0 {
        println!(
            "{} with non UTF-8 names skipped",
            plural(skipped, "entry", "entries")
        );
    }
    println!("Generated files:");
    println!("- {}", paths.json.display());
    println!("- {}", paths.markdown.display());
}
