//! wpdocs skill - scaffold and package skill directories.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::skill::{self, scaffold};

#[derive(Args, Debug)]
pub struct SkillArgs {
    #[command(subcommand)]
    pub command: SkillCommand,
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Initialize a new skill from a template
    Init(SkillInitArgs),

    /// Package a skill directory into a .skill archive
    Package(SkillPackageArgs),
}

#[derive(Args, Debug)]
pub struct SkillInitArgs {
    /// Skill name (kebab-case, e.g. my-new-skill)
    pub name: String,

    /// Brief description of the skill
    #[arg(long, short, default_value = scaffold::DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Base directory of the project (the skill lands in <base>/skills/)
    #[arg(long, short, default_value = ".")]
    pub base_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct SkillPackageArgs {
    /// Path to the skill directory
    pub directory: PathBuf,

    /// Output path for the .skill archive
    #[arg(long, short)]
    pub output: PathBuf,

    /// Extra path components to skip (repeat or comma-separated)
    #[arg(long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &SkillArgs) -> Result<()> {
    match &args.command {
        SkillCommand::Init(init) => run_init(ctx, init),
        SkillCommand::Package(package) => run_package(ctx, package),
    }
}

fn run_init(ctx: &AppContext, args: &SkillInitArgs) -> Result<()> {
    let outcome = skill::init_skill(&args.name, &args.description, &args.base_dir)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "name": args.name,
            "path": outcome.skill_dir.display().to_string(),
            "manifest": outcome.manifest_path.display().to_string(),
        }));
    }

    println!("Created: {}", outcome.manifest_path.display());
    println!();
    println!("{} Skill initialized: {}", "✓".green().bold(), args.name);
    println!(
        "Edit {} to customize your skill.",
        outcome.manifest_path.display()
    );
    Ok(())
}

fn run_package(ctx: &AppContext, args: &SkillPackageArgs) -> Result<()> {
    if !ctx.robot_mode && args.output.extension().is_none_or(|ext| ext != "skill") {
        eprintln!(
            "{} output file does not have the .skill extension",
            "!".yellow()
        );
    }

    let mut exclude = ctx.config.package.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    let summary = skill::package_skill(&args.directory, &args.output, &exclude)?;

    if ctx.robot_mode {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "output": summary.output.display().to_string(),
            "count": summary.entries.len(),
            "entries": summary.entries,
        }));
    }

    for entry in &summary.entries {
        println!("  Added: {entry}");
    }
    println!(
        "{} Created: {} ({} entries)",
        "✓".green().bold(),
        summary.output.display(),
        summary.entries.len()
    );
    Ok(())
}
