use clap::Parser;
use dialoguer::console::{style, Term};
use dialoguer::Confirm;
use dpt::commands::{self, REMOVE_PATTERN};
use dpt::config::{Args, Command, EnvCommand};
use dpt::inspect::Inspector;
use std::path::Path;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // stdout carries the listing; logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {}", e))?;

    let ok = match args.command {
        Command::Greet { name, count } => {
            for _ in 0..count {
                println!("Hello {}!", name);
            }
            true
        }
        Command::Env(EnvCommand::List { path, json }) => list(&path, json)?,
        Command::Env(EnvCommand::Remove { path, yes, dry_run }) => remove(&path, yes, dry_run)?,
        Command::Env(EnvCommand::Init { path, force, dry_run }) => init(&path, force, dry_run)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn list(path: &Path, json: bool) -> anyhow::Result<bool> {
    let entries = match commands::list_env_files(path, &Inspector::new()) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Listing failed: {}", e);
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(true);
    }

    if entries.is_empty() {
        println!("{}", style(format!("No 'dot env' files found in '{}'", path.display())).yellow());
        println!();
        return Ok(true);
    }

    println!(
        "Found {} 'dot env' files in '{}'",
        style(entries.len()).green(),
        path.display()
    );
    println!("\nListing files:");
    let styled = Term::stdout().is_term();
    for entry in &entries {
        println!("{}", commands::render_line(entry, styled));
    }
    println!();
    Ok(true)
}

fn remove(path: &Path, yes: bool, dry_run: bool) -> anyhow::Result<bool> {
    let paths = match commands::find(path, REMOVE_PATTERN) {
        Ok(paths) => paths,
        Err(e) => {
            error!("Scan failed: {}", e);
            return Ok(false);
        }
    };

    let files = commands::removable_files(&paths);
    if files.is_empty() {
        println!("{}", style(format!("No '.env' files found in '{}'", path.display())).yellow());
        return Ok(true);
    }

    if !yes && !dry_run {
        for p in &files {
            println!("  {}", p.display());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} '.env' file(s)?", files.len()))
            .default(false)
            .interact_on(&Term::stderr())
            .map_err(|e| anyhow::anyhow!("confirmation failed ({}); pass --yes to skip it", e))?;
        if !confirmed {
            info!("Removal cancelled.");
            return Ok(true);
        }
    }

    let report = commands::remove_paths(&paths, dry_run);
    let verb = if dry_run { "Would remove" } else { "Removed" };
    for p in &report.removed {
        println!("{} {}", style(verb).red(), p.display());
    }
    for (p, e) in &report.failed {
        error!("Could not remove {}: {}", p.display(), e);
    }
    println!(
        "{} {} file(s), skipped {}, failed {}",
        verb,
        report.removed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report.is_success())
}

fn init(path: &Path, force: bool, dry_run: bool) -> anyhow::Result<bool> {
    let report = match commands::init_env_files(path, force, dry_run) {
        Ok(report) => report,
        Err(e) => {
            error!("Initialization failed: {}", e);
            return Ok(false);
        }
    };

    let verb = if dry_run { "Would create" } else { "Created" };
    for (example, destination) in &report.created {
        println!("{} {} from {}", style(verb).green(), destination.display(), example.display());
    }
    for destination in &report.skipped {
        println!("{} {} (already exists, use --force to overwrite)", style("Skipped").yellow(), destination.display());
    }
    for (destination, e) in &report.failed {
        error!("Could not create {}: {}", destination.display(), e);
    }

    if report.created.is_empty() && report.skipped.is_empty() && report.failed.is_empty() {
        println!("{}", style(format!("No '.env.example' files found in '{}'", path.display())).yellow());
    }
    Ok(report.is_success())
}
