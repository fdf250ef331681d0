use anyhow::Context;
use clap::{Parser, Subcommand};
use ferrous_lookup_application::use_cases::{ActionResponse, LookupAction};
use ferrous_lookup_domain::{CliOverrides, LookupOptions, QueryType};
use tracing::info;

mod bootstrap;
mod di;
mod input;
mod output;

const RETRY_HINT: &str = "DNS lookup failed, the command can be retried";

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - batch DNS lookups for domains and IP addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// DNS server to query instead of the configured upstream servers
    #[arg(short = 's', long, value_name = "ADDR", global = true)]
    server: Option<String>,

    /// Record types to query for domains (A,AAAA,CNAME,MX,TXT,NS,SOA)
    #[arg(short = 't', long, value_delimiter = ',', global = true)]
    types: Option<Vec<QueryType>>,

    /// Only look up IP addresses in private ranges
    #[arg(long, global = true)]
    private_only: bool,

    /// Report subjects without any answer as misses
    #[arg(long, global = true)]
    answer_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a batch of domains and IP addresses (stdin when none given)
    Lookup {
        subjects: Vec<String>,

        /// Print every searched record set under its summary line
        #[arg(long)]
        details: bool,
    },
    /// Look a single subject up again
    Retry { subject: String },
    /// Run one record type for a single subject
    Query {
        subject: String,
        #[arg(value_name = "TYPE")]
        query_type: QueryType,
    },
    /// Dispatch a raw action, e.g. '{"action":"RETRY_LOOKUP","subject":"example.com"}'
    Action {
        #[arg(value_name = "JSON")]
        action: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_server: cli.server.clone(),
        query_types: cli.types.clone(),
        private_ip_only: cli.private_only,
        answer_only: cli.answer_only,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;
    let options = config.lookup.clone();

    match cli.command {
        Command::Lookup { subjects, details } => {
            let subjects = input::collect_subjects(&subjects).await?;
            let outcomes = use_cases
                .run_lookup
                .execute(&subjects, &options)
                .await
                .context(RETRY_HINT)?;

            if cli.json {
                println!("{}", output::to_json(&outcomes)?);
            } else {
                print!("{}", output::render_outcomes(&outcomes, details));
            }
        }
        Command::Retry { subject } => {
            let action = LookupAction::RetryLookup { subject };
            run_action(&use_cases, action, &options, cli.json).await?;
        }
        Command::Query {
            subject,
            query_type,
        } => {
            let action = LookupAction::RunQuery {
                subject,
                query_type,
            };
            run_action(&use_cases, action, &options, cli.json).await?;
        }
        Command::Action { action } => {
            let action: LookupAction =
                serde_json::from_str(&action).context("invalid action JSON")?;
            run_action(&use_cases, action, &options, cli.json).await?;
        }
    }

    Ok(())
}

async fn run_action(
    use_cases: &di::UseCases,
    action: LookupAction,
    options: &LookupOptions,
    json: bool,
) -> anyhow::Result<()> {
    let query_type = match &action {
        LookupAction::RunQuery { query_type, .. } => Some(*query_type),
        LookupAction::RetryLookup { .. } => None,
    };

    let response: ActionResponse = use_cases
        .handle_action
        .execute(action, options)
        .await
        .context(RETRY_HINT)?;

    if json {
        println!("{}", output::to_json(&response)?);
    } else {
        print!("{}", output::render_response(&response, query_type));
    }

    Ok(())
}
