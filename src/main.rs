use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docscaffold::cli::ui::Output;
use docscaffold::cli::{CommandContext, ConfigOverrides};

#[derive(Parser)]
#[command(name = "docscaffold")]
#[command(
    version,
    about = "Documentation scaffold generator driven by an indented outline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Config file (replaces docscaffold.toml)")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Args)]
struct ScaffoldArgs {
    #[arg(long, help = "Outline file")]
    outline: Option<PathBuf>,
    #[arg(long, help = "Scaffold root directory")]
    root: Option<PathBuf>,
}

impl ScaffoldArgs {
    fn overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            outline: self.outline,
            root: self.root,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing section placeholders and rewrite the aggregator page
    Generate {
        #[command(flatten)]
        paths: ScaffoldArgs,
    },

    /// Report scaffold drift against the outline (read-only)
    Audit {
        #[command(flatten)]
        paths: ScaffoldArgs,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Write the releases manifest for published downloads
    Manifest {
        #[arg(long, help = "Releases directory")]
        releases: Option<PathBuf>,
        #[arg(long, help = "Public directory that manifest paths are relative to")]
        public: Option<PathBuf>,
        #[arg(long, short, help = "Manifest output file")]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write docscaffold.toml with default values
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocscaffold encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // RUST_BACKTRACE=1 still prints a backtrace
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Generate { paths } => {
            let ctx = CommandContext::load(config_file, &paths.overrides())?;
            docscaffold::cli::commands::generate::run(&ctx)?;
        }
        Commands::Audit { paths, format } => {
            let ctx = CommandContext::load(config_file, &paths.overrides())?;
            docscaffold::cli::commands::audit::run(&ctx, &format)?;
        }
        Commands::Manifest {
            releases,
            public,
            output,
        } => {
            let overrides = ConfigOverrides {
                releases,
                public,
                output,
                ..Default::default()
            };
            let ctx = CommandContext::load(config_file, &overrides)?;
            docscaffold::cli::commands::manifest::run(&ctx)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                docscaffold::cli::commands::config::show(config_file, &format)?;
            }
            ConfigAction::Path => {
                docscaffold::cli::commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                docscaffold::cli::commands::config::init(force)?;
            }
        },
    }

    Ok(())
}
