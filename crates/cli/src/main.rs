use clap::{Parser, Subcommand};
use crm_housekeeping_domain::{CliOverrides, Config};
use crm_housekeeping_jobs::JobRunner;
use tracing::info;

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "crm-housekeeping")]
#[command(version)]
#[command(about = "CRM housekeeping - one-shot maintenance tasks for the CRM database")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Task to run; defaults to cleanup-customers
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Delete customers without an order in the inactivity window
    CleanupCustomers,
    /// Log orders placed within the reminder lookback window
    OrderReminders,
    /// Top up products whose stock fell below the threshold
    Restock,
    /// Append a liveness line
    Heartbeat,
    /// Replace the database contents with sample data
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let command = cli.command.unwrap_or(Command::CleanupCustomers);
    info!(
        command = ?command,
        "Starting CRM housekeeping v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Tasks record an unreachable database in their own log; seeding needs it up front.
    let pool = if command == Command::Seed {
        bootstrap::init_database(&config.database).await?
    } else {
        bootstrap::init_database_or_lazy(&config.database).await?
    };

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&config, &repos);
    let jobs = di::Jobs::new(&config, &use_cases);

    let runner = match command {
        Command::Seed => return run_seed(&config, &use_cases).await,
        Command::CleanupCustomers => JobRunner::new().with_job(jobs.cleanup_customers),
        Command::OrderReminders => JobRunner::new().with_job(jobs.order_reminders),
        Command::Restock => JobRunner::new().with_job(jobs.restock),
        Command::Heartbeat => JobRunner::new().with_job(jobs.heartbeat),
    };

    // Task failures go to the activity log, not the exit status.
    for job_report in runner.run().await {
        if let Some(line) = report::console_line(command, &job_report.outcome) {
            println!("{}", line);
        }
    }

    Ok(())
}

async fn run_seed(config: &Config, use_cases: &di::UseCases) -> anyhow::Result<()> {
    println!("Seeding CRM database at {}...", config.database.path);
    let summary = use_cases.seed.execute().await?;
    println!("Created {} customers", summary.customers);
    println!("Created {} products", summary.products);
    println!("Created {} orders", summary.orders);
    println!("Database seeded successfully!");

    Ok(())
}
