use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rolodex_core::error::ExitCode;
use rolodex_core::{AppConfig, DataSourceKind, TriggerMode, filter_with};
use rolodex_sources::{fetch_or_empty, source_from_config};
use rolodex_tui::app::App;

const DEFAULT_LOG_FILTER: &str = "rolodex=info,rolodex_core=info,rolodex_sources=info,rolodex_tui=info";

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "rolodex",
    about = "Pick a person from a fetched list with a terminal autocomplete",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format.
    /// Also enabled by setting ROLODEX_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to ~/.config/rolodex/config.toml or $ROLODEX_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where to fetch people from.
    #[arg(long, global = true, value_enum)]
    source: Option<SourceArg>,

    /// Override the endpoint URL for local/remote sources.
    #[arg(long, global = true)]
    url: Option<String>,

    /// JSON file to read people from (implies --source file).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// How the dropdown opens.
    #[arg(long, global = true, value_enum)]
    trigger: Option<TriggerArg>,

    /// Match names case-sensitively.
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// Initial value of the input.
    #[arg(long)]
    value: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch people once and print the names matching QUERY.
    Filter {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch people once and print the whole pool.
    Fetch,

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Print the config file path.
    Path,
    /// Write a default config file.
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Local,
    Remote,
    File,
}

#[derive(Clone, Copy, ValueEnum)]
enum TriggerArg {
    TypeToOpen,
    ButtonToggle,
}

impl From<SourceArg> for DataSourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Local => Self::Local,
            SourceArg::Remote => Self::Remote,
            SourceArg::File => Self::File,
        }
    }
}

impl From<TriggerArg> for TriggerMode {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::TypeToOpen => Self::TypeToOpen,
            TriggerArg::ButtonToggle => Self::ButtonToggle,
        }
    }
}

// ─── Main ────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    let json_output = cli.json || std::env::var("ROLODEX_JSON").as_deref() == Ok("1");
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    init_logging(cli.command.is_none())?;

    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    apply_overrides(&mut config, &cli);
    if let Err(err) = config.validate() {
        eprintln!("{err}");
        std::process::exit(ExitCode::InvalidArgs as i32);
    }

    match cli.command {
        None => {
            let source = source_from_config(&config.source)?;
            let mut app = App::new(config);
            if let Some(value) = cli.value {
                app.set_value(value);
            }

            tokio::task::block_in_place(|| rolodex_tui::run_tui(&mut app, source))?;

            match app.selection() {
                Some(value) if json_output => print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "value": value },
                    "meta": { "duration_ms": start.elapsed().as_millis() }
                }))?,
                Some(value) => println!("{value}"),
                None => {
                    if json_output {
                        print_json(&serde_json::json!({
                            "status": "error",
                            "error": "no_selection",
                            "meta": { "duration_ms": start.elapsed().as_millis() }
                        }))?;
                    }
                    std::process::exit(ExitCode::NoSelection as i32);
                }
            }
        }

        Some(Commands::Filter { query, limit }) => {
            let source = source_from_config(&config.source)?;
            let pool = fetch_or_empty(source.as_ref()).await;

            // empty input never reaches the filter
            let mut matches = if query.is_empty() {
                Vec::new()
            } else {
                filter_with(&pool, &query, config.widget.filter_options())
            };
            if let Some(limit) = limit {
                matches.truncate(limit);
            }
            let dur = start.elapsed().as_millis();

            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "items": matches, "total": matches.len(), "query": query },
                    "meta": { "duration_ms": dur }
                }))?;
            } else {
                for person in &matches {
                    println!("{}", person.display_name());
                }
            }
        }

        Some(Commands::Fetch) => {
            let source = source_from_config(&config.source)?;
            match source.fetch_people().await {
                Ok(people) => {
                    let dur = start.elapsed().as_millis();
                    if json_output {
                        print_json(&serde_json::json!({
                            "status": "ok",
                            "data": { "items": people, "total": people.len() },
                            "meta": { "duration_ms": dur }
                        }))?;
                    } else {
                        for person in &people {
                            println!("{:<32}  {}", person.display_name(), person.avatar_url);
                        }
                        println!("{} people from {}", people.len(), source.name());
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "fetch failed");
                    if json_output {
                        print_json(&serde_json::json!({
                            "status": "error",
                            "error": "fetch_failed",
                            "message": err.to_string(),
                        }))?;
                    } else {
                        eprintln!("fetch failed: {err}");
                    }
                    std::process::exit(ExitCode::NetworkError as i32);
                }
            }
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                if json_output {
                    print_json(&serde_json::to_value(&config)?)?;
                } else {
                    print!("{}", config.to_toml()?);
                }
            }
            ConfigAction::Path => println!("{}", config_path.display()),
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    eprintln!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    );
                    std::process::exit(ExitCode::GeneralError as i32);
                }
                AppConfig::default().save_to(&config_path)?;
                println!("Wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(source) = cli.source {
        config.source.kind = source.into();
    }
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
    }
    if let Some(file) = &cli.file {
        config.source.kind = DataSourceKind::File;
        config.source.file = file.to_string_lossy().to_string();
    }
    if let Some(trigger) = cli.trigger {
        config.widget.trigger = trigger.into();
    }
    if cli.case_sensitive {
        config.widget.case_sensitive = true;
    }
}

/// Interactive sessions log to a file so output does not tear the screen.
fn init_logging(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if interactive {
        let dir = AppConfig::log_dir();
        std::fs::create_dir_all(&dir)?;
        let file = std::fs::File::create(dir.join("rolodex.log"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
