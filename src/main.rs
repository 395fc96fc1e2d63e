use anyhow::Result;
use clap::{Parser, Subcommand};
use dairy_insights::{
    application::DemoReport,
    config::Settings,
    domain::metrics::HerdSummary,
    infrastructure::{log_messages, telemetry},
    registration::FarmerRegistration,
    Application, Error,
};
use tracing::{info, instrument};

#[derive(Parser)]
#[command(name = "dairy-insights")]
#[command(about = "Feed efficiency and emission trends for a dairy herd")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard summary for the demo herd
    Report {
        /// Seed for the generated series (defaults to demo.seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Days in the generated series (defaults to demo.days)
        #[arg(long)]
        days: Option<u32>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Register a farmer with the configured backend
    Register {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        farm_name: String,

        #[arg(long)]
        email: String,

        /// Digits only
        #[arg(long)]
        telephone: String,

        #[arg(long)]
        county: String,

        #[arg(long, env = "DAIRY_INSIGHTS_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
#[instrument(skip_all)]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new()?;
    telemetry::init(&settings.logging);

    info!("{}", log_messages::application::STARTING);
    info!(
        base_url = %settings.registration.base_url,
        "{}",
        log_messages::application::SETTINGS_LOADED
    );
    let app = Application::with_settings(settings)?;

    match cli.command {
        Commands::Report { seed, days, json } => {
            let report = app.demo_report(seed, days)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Register {
            full_name,
            farm_name,
            email,
            telephone,
            county,
            password,
        } => {
            let outcome = match FarmerRegistration::try_new(
                full_name, farm_name, email, telephone, county, password,
            ) {
                Ok(registration) => app.register(&registration).await,
                Err(e) => Err(e.into()),
            };

            match outcome {
                Ok(route) => println!("Registered. Continue at {route}"),
                Err(Error::Registration(e)) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
                Err(e) => {
                    tracing::error!(error = %e, "{}", log_messages::registration::UNEXPECTED_ERROR);
                    eprintln!("{}", log_messages::registration::UNEXPECTED_ERROR);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &DemoReport) {
    println!("Weekly chart series");
    print_summary(&report.weekly);
    println!();
    println!(
        "Generated series (seed {}, {} days)",
        report.seed, report.days
    );
    print_summary(&report.generated);
}

fn print_summary(summary: &HerdSummary) {
    for entry in summary.ranking().iter() {
        let marker = if entry.below_threshold() { "  (low)" } else { "" };
        println!(
            "  {:<10} {:.2} L/kg{marker}",
            entry.name().as_ref(),
            entry.efficiency().into_inner()
        );
    }
    match summary.average_efficiency() {
        Some(average) => println!("  Average feed efficiency: {:.2} L/kg", average.into_inner()),
        None => println!("  {}", log_messages::metrics::EMPTY_HERD),
    }
    println!("  {}", summary.methane_trend().label());
    println!("  {}", summary.milk_trend().label());
}
