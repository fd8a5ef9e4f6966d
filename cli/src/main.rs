//! arc-export CLI - Arc sidebar to Netscape bookmarks HTML

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use arc_export::{
    default_sidebar_path, load_document, parse_sidebar, to_netscape_html, write_text, Error,
    ExportOptions, ExportStats,
};

#[derive(Parser)]
#[command(name = "arc-export")]
#[command(version)]
#[command(about = "Export Arc Browser Spaces/Folders/Tabs to Netscape bookmarks HTML", long_about = None)]
struct Cli {
    /// Path to StorableSidebar.json (auto-discovered if omitted)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output HTML path
    #[arg(long, value_name = "PATH", default_value = "./arc_bookmarks.html")]
    output: PathBuf,

    /// Include unpinned spaces when pinned/unpinned is available
    #[arg(long)]
    include_unpinned: bool,

    /// Export from every container, not just the default container
    #[arg(long)]
    all_containers: bool,

    /// Print debug counts and detected structures
    #[arg(long)]
    verbose: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = cli
        .input
        .clone()
        .or_else(default_sidebar_path)
        .filter(|path| path.is_file())
        .ok_or(Error::SidebarNotFound)?;

    let doc = load_document(&input)?;

    let options = ExportOptions::new()
        .include_unpinned(cli.include_unpinned)
        .all_containers(cli.all_containers);
    let (nodes, stats) = parse_sidebar(&doc, &options);

    if nodes.is_empty() {
        return Err(Error::NothingExportable);
    }

    let html = to_netscape_html(&nodes);
    write_text(&cli.output, &html)?;

    if cli.verbose {
        print_summary(&input, &cli.output, &stats);
    }

    Ok(())
}

fn print_summary(input: &std::path::Path, output: &std::path::Path, stats: &ExportStats) {
    println!("{}: {}", "Input".bold(), input.display());
    println!(
        "{}: {} (selected: {})",
        "Containers".bold(),
        stats.containers_total,
        stats.containers_selected
    );
    if stats.spaces_detected > 0 {
        println!(
            "{}: {} (included: {})",
            "Spaces detected".bold(),
            stats.spaces_detected,
            stats.spaces_included
        );
    } else {
        println!("{}: 0", "Spaces detected".bold());
    }
    println!("{}: {}", "Folders".bold(), stats.folders);
    println!("{}: {}", "Tabs".bold(), stats.tabs);
    println!("{}: {}", "Output".bold(), output.display());
}
