use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gallerysync::config::LoggingConfig;
use gallerysync::{Config, SyncError, SyncOutcome, SyncReport, Synchronizer};

#[derive(Parser)]
#[command(name = "gallerysync")]
#[command(about = "Keeps a web page's gallery image list in sync with an image directory")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (defaults to ./gallerysync.yml, then the XDG config location)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the image list declaration in the target file
    Sync {
        /// Report what would change without writing the target file
        #[arg(long)]
        dry_run: bool,

        /// Override the project root from the configuration
        #[arg(long)]
        root: Option<String>,
    },

    /// List the images that would be written
    List {
        /// Override the project root from the configuration
        #[arg(long)]
        root: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A bare invocation runs the synchronization with the loaded configuration
    match cli.command {
        None => cmd_sync(false, None, prepare(&cli)?),
        Some(Commands::Sync { dry_run, ref root }) => {
            cmd_sync(dry_run, root.clone(), prepare(&cli)?)
        }
        Some(Commands::List { ref root }) => cmd_list(root.clone(), prepare(&cli)?),
        // Init must work before any configuration file exists
        Some(Commands::Init { force }) => {
            init_logging(cli.verbose, &LoggingConfig::default())?;
            cmd_init(force, cli.config)
        }
    }
}

/// Load configuration and start logging for commands that operate on a site
fn prepare(cli: &Cli) -> Result<Config> {
    let config = load_config(cli.config.as_ref())?;
    init_logging(cli.verbose, &config.logging)?;
    info!("Starting gallerysync v{}", env!("CARGO_PKG_VERSION"));
    Ok(config)
}

/// Initialize logging based on verbosity level and configuration
fn init_logging(verbose: bool, logging: &LoggingConfig) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(logging.color),
        )
        .with(filter)
        .init();

    Ok(())
}

/// Load configuration from specified path or default location
fn load_config(config_path: Option<&PathBuf>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(),
    }
}

/// Synchronize the target file with the image directory
fn cmd_sync(dry_run: bool, root: Option<String>, config: Config) -> Result<()> {
    let config = match root {
        Some(root) => config.with_project_root(root),
        None => config,
    };

    let report = Synchronizer::new(config).dry_run(dry_run).run()?;
    print_sync_report(&report);

    Ok(())
}

/// List the images found in the image directory
fn cmd_list(root: Option<String>, config: Config) -> Result<()> {
    let config = match root {
        Some(root) => config.with_project_root(root),
        None => config,
    };

    let synchronizer = Synchronizer::new(config);
    println!(
        "🔍 Scanning directory: {}",
        synchronizer.config().image_dir_path().display()
    );

    let images = match synchronizer.scan() {
        Ok(images) => images,
        Err(SyncError::DirectoryNotFound(_)) => {
            println!("❌ Error: Image directory not found!");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("   Found {} images", images.len());
    for image in &images {
        println!("  🖼️  {}", image.web_path);
    }

    Ok(())
}

/// Write a default configuration file
fn cmd_init(force: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists at {:?} (use --force to overwrite)",
            config_path
        );
    }

    Config::default().save(&config_path)?;
    info!("Configuration saved to: {:?}", config_path);

    println!("✅ gallerysync initialized successfully!");
    println!("   Config: {:?}", config_path);

    Ok(())
}

/// Print the synchronization report to stdout
fn print_sync_report(report: &SyncReport) {
    println!("🔍 Scanning directory: {}", report.image_dir.display());

    if report.outcome == SyncOutcome::DirectoryMissing {
        println!("❌ Error: Image directory not found!");
        return;
    }

    println!("   Found {} images", report.images.len());
    for image in &report.images {
        println!("  🖼️  {}", image.web_path);
    }
    println!();

    let target = report.target_file.display();
    match report.outcome {
        SyncOutcome::Updated if report.dry_run => {
            println!("📝 Dry run: {} would be updated", target);
        }
        SyncOutcome::Updated => {
            println!("✅ {} has been successfully updated with the new image list.", target);
        }
        SyncOutcome::Unchanged => println!("No changes needed."),
        SyncOutcome::PatternNotFound => {
            println!("⚠️  No image list declaration found in {}", target);
            println!("   The file was left unchanged");
        }
        SyncOutcome::DirectoryMissing => {}
    }
}
