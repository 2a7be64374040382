//! # nestbase
//!
//! CLI tool for generating NestJS base classes from a Prisma DMMF document.
//!
//! ## Usage
//!
//! ```bash
//! # Generate classes from generator options
//! nestbase generate --input options.json
//!
//! # Write to a specific output directory, for real
//! nestbase generate --input options.json --output ./src/base --no-dry-run
//!
//! # Skip prettier
//! nestbase generate --input options.json --no-format
//!
//! # Initialize configuration
//! nestbase init
//!
//! # Print the generator manifest
//! nestbase manifest
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nestbase::{
    error::GeneratorError, GenerationContext, GenerationReport, Generator, GeneratorConfig,
    GeneratorOptions, Passthrough, Prettier,
};
use nestbase_cli::{
    config::{CliArgs, ConfigManager, CONFIG_FILENAME},
    error::{CliError, CliResult},
    manifest::Manifest,
    report::Report,
};

#[derive(Parser)]
#[command(name = "nestbase")]
#[command(author, version, about = "Generate NestJS base classes from a Prisma schema", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript classes from generator options
    Generate {
        /// Generator options JSON, as handed to generators by the schema toolchain
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated TypeScript files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview changes without writing files
        #[arg(long, conflicts_with = "no_dry_run")]
        dry_run: bool,

        /// Write files even when the configuration asks for a dry run
        #[arg(long)]
        no_dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip formatting generated sources with prettier
        #[arg(long)]
        no_format: bool,
    },

    /// Initialize a new nestbase configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Print the generator manifest as JSON
    Manifest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            dry_run,
            no_dry_run,
            config,
            no_format,
        } => {
            let dry_run = match (dry_run, no_dry_run) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd_generate(input, CliArgs { output, dry_run }, config, no_format)
        }

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Manifest => cmd_manifest(),
    }
}

/// Generate command implementation.
fn cmd_generate(
    input: PathBuf,
    args: CliArgs,
    config_path: Option<PathBuf>,
    no_format: bool,
) -> CliResult<()> {
    println!("{}", "Reading generator options...".cyan());
    let options = GeneratorOptions::load(&input).map_err(GeneratorError::from)?;
    println!(
        "  Found {} model(s), {} enum(s)",
        options.dmmf.datamodel.models.len().to_string().green(),
        options.dmmf.datamodel.enums.len().to_string().green()
    );

    // Document options, then the config file, then flags
    let file = ConfigManager::load(config_path.as_deref())?;
    let map = ConfigManager::merge_file(options.generator.config.clone(), &file);
    let map = ConfigManager::merge_cli_args(map, &args);
    let config = GeneratorConfig::from_map(&map).map_err(GeneratorError::from)?;

    let cwd = std::env::current_dir()?;
    let mut context = GenerationContext::with_config(options, config, &cwd);
    if let Some(output) = ConfigManager::output_override(&file, &args) {
        context = context.with_output_dir(&output, &cwd);
    }

    println!("{}", "Generating classes...".cyan());
    let generator = Generator::new(context);
    let report = if no_format {
        generator.run(&Passthrough)?
    } else {
        generator.run(&Prettier::default())?
    };

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    for file in report.all() {
        if file.written {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                file.bytes(),
                file.path.display()
            );
        } else {
            println!("{} Would write {}", "[dry-run]".yellow(), file.path.display());
        }
        if !file.formatted {
            println!("  {} left unformatted", "warning:".yellow());
        }
    }

    println!(
        "  Generated {} file(s), {} written",
        report.all().count().to_string().green(),
        report.written().to_string().green()
    );
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> CliResult<()> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Manifest command implementation.
fn cmd_manifest() -> CliResult<()> {
    let json = Manifest::default()
        .to_json()
        .map_err(|e| CliError::Validation(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    let report = Report::from_error(error);
    let mut lines = report.lines().into_iter();
    if let Some(headline) = lines.next() {
        eprintln!("{} {}", "Error:".red().bold(), headline);
    }
    for line in lines {
        eprintln!("{}", line);
    }
}
