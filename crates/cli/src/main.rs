use clap::{Parser, Subcommand};
use lame_delegation_domain::CliOverrides;
use std::path::PathBuf;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "lame-delegation-check")]
#[command(version)]
#[command(about = "Detects lame DNS delegations by walking each domain's chain from the root")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    query_timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a single domain, printing every hop
    #[command(visible_alias = "q")]
    Query {
        /// Domain to check
        #[arg(short = 'd', long)]
        domain: String,

        /// Record type for the final authority check
        #[arg(short = 't', long = "queryType", default_value = "A")]
        query_type: String,
    },

    /// Check every domain in a newline-delimited file and write a CSV report
    #[command(visible_alias = "s")]
    Scan {
        /// Host list, one domain per line
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Record type for the final authority check
        #[arg(short = 't', long = "queryType", default_value = "A")]
        query_type: String,

        /// Directory the report is written to
        #[arg(short = 'o', long)]
        outdir: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Single-domain runs show the walk unless a level was asked for.
    let log_level = match (&cli.command, cli.log_level) {
        (Command::Query { .. }, None) => Some("debug".to_string()),
        (_, level) => level,
    };

    let output_dir = match &cli.command {
        Command::Scan { outdir, .. } => outdir.clone(),
        Command::Query { .. } => None,
    };

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            output_dir,
            log_level,
            query_timeout: cli.query_timeout,
        },
    )?;

    bootstrap::init_logging(&config);

    let services = di::Services::new(&config).await;

    match cli.command {
        Command::Query { domain, query_type } => {
            commands::query::run(&services, &domain, &query_type).await
        }
        Command::Scan {
            input, query_type, ..
        } => commands::scan::run(&services, &config, &input, &query_type).await,
    }
}
