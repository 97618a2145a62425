//! Browser extension asset builder CLI

use anyhow::Result;
use clap::Parser;
use colored::*;
use extbuild::{build_extensions, resolve_working_path, AssetKind, BuildConfig, BuildOptions, HttpTransport};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extbuild")]
#[command(about = "Assemble and minify browser extension assets for Firefox, Safari and Chrome", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root containing the browser source trees (defaults to the current directory)
    path: Option<PathBuf>,

    /// Configuration file (defaults to extbuild.toml in the project root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Zip each built tree into a distributable archive
    #[arg(short, long)]
    package: bool,

    /// Do not run setup.sh / setup.bat before copying
    #[arg(long)]
    skip_setup: bool,

    /// Show per-file detail
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            let tag = match record.level() {
                log::Level::Error => "--".red(),
                log::Level::Warn => "--".yellow(),
                log::Level::Info => "--".blue(),
                _ => "  ".normal(),
            };
            writeln!(buf, "{} {}", tag, record.args())
        })
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let working_path = resolve_working_path(cli.path.as_deref())?;
    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::load_or_default(&working_path)?,
    };
    let options = BuildOptions {
        run_setup: !cli.skip_setup,
        package: cli.package,
    };
    let transport = HttpTransport::new()?;

    let result = build_extensions(&working_path, &config, &options, &transport)?;

    println!();
    println!("{}", "✅ Compiling complete".green().bold());
    println!();
    println!("📊 Summary:");
    println!("  - Targets: {}", result.copied.len());
    println!("  - Scripts written: {}", result.written_of(AssetKind::Script).count());
    println!("  - Styles written: {}", result.written_of(AssetKind::Style).count());
    println!("  - Output: {}", result.output_root.display());
    for archive in &result.archives {
        println!("  - Package: {}", archive.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("{}", "Extension Asset Builder".bold().blue());
    println!("{}", "=".repeat(50).blue());

    if let Err(e) = run(cli) {
        eprintln!("{}", "❌ Build failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
