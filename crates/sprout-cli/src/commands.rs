use std::path::Path;

use anyhow::bail;
use colored::Colorize;

use sprout_render::generate_workspace;
use sprout_seed::{default_seeds_dir, list_seeds, load_seed, resolve_seed_path, validate_file};
use sprout_update::{
    init_workspace, read_meta, update_workspace, ChangeAction, UpdateOptions, UpdateReport,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let seeds_dir = cli.seeds_dir.unwrap_or_else(default_seeds_dir);
    match cli.command {
        Command::Init(args) => cmd_init(args, &seeds_dir),
        Command::List(_) => cmd_list(&seeds_dir),
        Command::Preview(args) => cmd_preview(args, &seeds_dir),
        Command::Validate(args) => cmd_validate(args),
        Command::Status(args) => cmd_status(args),
        Command::Update(args) => cmd_update(args, &seeds_dir),
    }
}

fn cmd_init(args: InitArgs, seeds_dir: &Path) -> anyhow::Result<()> {
    let written = init_workspace(&args.seed, &args.output, seeds_dir)?;
    println!(
        "{} Generated {} files in {}",
        "✓".green().bold(),
        written.len().to_string().bold(),
        args.output.display().to_string().bold()
    );
    for path in &written {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            println!("  {} {}", "created:".green(), name);
        }
    }
    Ok(())
}

fn cmd_list(seeds_dir: &Path) -> anyhow::Result<()> {
    let seeds = list_seeds(seeds_dir);
    if seeds.is_empty() {
        println!("No seeds found in {}", seeds_dir.display().to_string().bold());
        return Ok(());
    }
    println!("Seeds in {}:", seeds_dir.display().to_string().bold());
    for seed in &seeds {
        println!("  {}  {}", seed.name.yellow(), seed.display_name.dimmed());
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs, seeds_dir: &Path) -> anyhow::Result<()> {
    let path = resolve_seed_path(&args.seed, seeds_dir)?;
    let seed = load_seed(&path)?;
    let documents = generate_workspace(&seed);

    for (name, content) in &documents {
        if let Some(only) = &args.file {
            if name != only {
                continue;
            }
        }
        if content.trim().is_empty() {
            continue;
        }
        println!("{}", format!("── {name} ──").cyan().bold());
        println!("{content}");
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let result = validate_file(&args.path);
    if result.errors.is_empty() {
        println!("{} {} is a valid seed", "✓".green().bold(), result.path.bold());
        return Ok(());
    }
    println!("{} {} has problems:", "✗".red().bold(), result.path.bold());
    for error in &result.errors {
        println!("  {} {}", "-".red(), error);
    }
    bail!("seed validation failed");
}

fn cmd_status(args: StatusArgs) -> anyhow::Result<()> {
    match read_meta(&args.workspace) {
        Some(meta) => {
            println!("Workspace: {}", args.workspace.display().to_string().bold());
            println!("  Seed: {} ({})", meta.seed_name.yellow(), meta.seed_id.dimmed());
            println!("  Version: {}", meta.installed_version.to_string().bold());
            println!("  Installed: {}", meta.installed_at);
            println!("  Tool: {}", meta.tool_version.dimmed());
        }
        None => {
            println!(
                "Workspace {} is not initialized (no metadata)",
                args.workspace.display().to_string().bold()
            );
        }
    }
    Ok(())
}

fn cmd_update(args: UpdateArgs, seeds_dir: &Path) -> anyhow::Result<()> {
    let opts = UpdateOptions {
        seed_name: args.seed,
        seeds_dir: seeds_dir.to_path_buf(),
        dry_run: args.dry_run,
        force: args.force,
    };
    let report = update_workspace(&args.workspace, &opts)?;

    if !report.success {
        for conflict in &report.conflicts {
            println!("{} {}", "✗".red().bold(), conflict);
        }
        bail!("update failed");
    }

    if args.dry_run {
        print_dry_run(&report);
    } else {
        print_update(&report);
    }
    Ok(())
}

fn print_dry_run(report: &UpdateReport) {
    println!(
        "Dry run: {} → {}",
        report.from_version.to_string().yellow(),
        report.to_version.to_string().yellow().bold()
    );
    for change in &report.changes {
        println!(
            "  {:<18} {} — {}",
            change.filename.bold(),
            change.action.as_str().cyan(),
            change.details
        );
    }
    println!("\nNo files were modified.");
}

fn print_update(report: &UpdateReport) {
    if report.is_current() {
        println!(
            "{} Workspace already at version {}",
            "✓".green().bold(),
            report.to_version.to_string().bold()
        );
    } else {
        println!(
            "{} Updated {} → {}",
            "✓".green().bold(),
            report.from_version.to_string().yellow(),
            report.to_version.to_string().yellow().bold()
        );
    }

    for change in &report.changes {
        let label = match change.action {
            ChangeAction::Overwritten => "overwritten".cyan(),
            ChangeAction::Preserved => "preserved".green(),
            ChangeAction::Skipped => "skipped".dimmed(),
            _ => change.action.as_str().yellow(),
        };
        println!("  {:<18} {} — {}", change.filename.bold(), label, change.details);
    }

    if let Some(backup) = &report.backup_path {
        println!("\nBackup: {}", backup.display().to_string().dimmed());
    }
}
