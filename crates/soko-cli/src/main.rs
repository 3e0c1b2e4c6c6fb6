mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "soko")]
#[command(about = "Username risk analysis and relationship graphs from collected OSINT data")]
struct Cli {
    /// YAML scoring rules; takes precedence over `SOKO_RULES_PATH`
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a username from platform presence and detail records
    Analyze {
        #[arg(long)]
        username: String,

        /// JSON platform presence summary
        #[arg(long)]
        presence: PathBuf,

        /// JSON detail records keyed by platform (`reddit`, `github`)
        #[arg(long)]
        detail: Option<PathBuf>,
    },
    /// Build the relationship graph for an investigation
    Graph {
        /// JSON investigation record
        #[arg(long)]
        investigation: PathBuf,

        /// JSON array of findings for the investigation
        #[arg(long)]
        findings: PathBuf,
    },
    /// Run a full investigation against captured scraper output
    Investigate {
        #[arg(long)]
        username: String,

        /// JSON capture with `platform_results`, `reddit` and `github`
        #[arg(long)]
        capture: PathBuf,
    },
    /// Print the effective scoring rules as YAML
    Rules,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = soko_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let rules_path = cli.rules.clone().or_else(|| config.rules_path.clone());
    let rules = commands::load_effective_rules(rules_path.as_deref())?;
    let pretty = config.pretty_json && !cli.compact;

    match cli.command {
        Commands::Analyze {
            username,
            presence,
            detail,
        } => commands::run_analyze(rules, &username, &presence, detail.as_deref(), pretty),
        Commands::Graph {
            investigation,
            findings,
        } => commands::run_graph(&investigation, &findings, pretty),
        Commands::Investigate { username, capture } => {
            commands::run_investigate(rules, &username, &capture, pretty)
        }
        Commands::Rules => commands::run_rules(&rules),
    }
}
