mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use fansort::organizer::{self, OrganizeOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise derive a default from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "fansort=debug,fansort_parser=debug".to_string()
        } else {
            "fansort=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Organize { dir, dry_run } => organize(&dir, dry_run),
        Commands::Parse { name, json } => parse_name(&name, json),
    }
}

fn organize(dir: &std::path::Path, dry_run: bool) -> Result<()> {
    let report = organizer::organize_dir(dir, OrganizeOptions { dry_run })?;

    if dry_run {
        println!("{} file(s) would move", report.moved);
    } else {
        println!("{} file(s) moved", report.moved);
    }

    if !report.skipped.is_empty() {
        println!("{} file(s) skipped:", report.skipped.len());
        for (path, reason) in &report.skipped {
            println!("  {}: {reason}", path.display());
        }
    }

    Ok(())
}

fn parse_name(name: &str, json: bool) -> Result<()> {
    let release = fansort_parser::parse(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&release)?);
    } else {
        println!("Group:     {}", release.group);
        println!("Series:    {}", release.series);
        if release.has_episode() {
            println!("Episode:   {}", release.episode);
        } else {
            println!("Episode:   unknown");
        }
        println!("Extension: {}", release.extension);
    }

    Ok(())
}
