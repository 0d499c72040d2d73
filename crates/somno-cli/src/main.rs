use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use somno_cli::config::{self, OutputFormat, SomnoConfig};
use somno_cli::input::read_records;
use somno_cli::output::{self, ChoiceKind};
use somno_cli::score::{ScoreOptions, breakdown_override, score_records};
use somno_scoring::{StrategyKind, all_strategies};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "somno")]
#[command(about = "Score sleep questionnaires into a sleep quality index", long_about = None)]
struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one questionnaire or a JSON array of them
    Score {
        file: PathBuf,
        #[arg(long)]
        strategy: Option<StrategyKind>,
        /// Print the per-component breakdown
        #[arg(long, conflicts_with = "no_breakdown")]
        breakdown: bool,
        /// Print only the total, overriding the config
        #[arg(long)]
        no_breakdown: bool,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List available scoring strategies
    Strategies,
    /// Print the value/label table of an answer scale
    Labels {
        #[arg(value_enum)]
        choice: ChoiceKind,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Commands::Score {
            file,
            strategy,
            breakdown,
            no_breakdown,
            format,
        } => {
            let config = config::load_or_default(&config_path)?;
            let options = ScoreOptions::resolve(
                &config,
                strategy,
                format,
                breakdown_override(breakdown, no_breakdown),
            );
            let records = read_records(&file)?;
            score_records(
                &records,
                &options,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
        }
        Commands::Strategies => {
            for strategy in all_strategies() {
                println!("{}", output::render_strategy(strategy.as_ref()));
            }
        }
        Commands::Labels { choice } => {
            for (value, label) in output::choice_table(choice) {
                println!("{value}  {label}");
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_or_default(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &SomnoConfig::new())?;
                println!("Config written to {}.", config_path.display());
            }
        },
    }

    Ok(())
}
