use clap::Parser;
use party_up::utils::{logger, validation::Validate};
use party_up::{CliConfig, CycleRunner, CycleSchedule, InvitePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting party-up CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Credentials are checked before any network activity.
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    println!("Welcome to PartyUp! The script will now start fetching users and inviting them to party.");

    let schedule = CycleSchedule::from_config(&config);
    if config.single_run {
        println!("Single-run mode: Executing one cycle...");
    } else {
        println!(
            "Running {} cycles with {} seconds interval...",
            schedule.cycles,
            schedule.interval.as_secs()
        );
    }

    let pipeline = match InvitePipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let runner = CycleRunner::new(pipeline, schedule);

    match runner.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Completed {} cycles, invited {} users",
                summary.cycles_run,
                summary.total_invited
            );
            println!(
                "\nCompleted all {} cycles. Invited {} users in total. Exiting.",
                summary.cycles_run, summary.total_invited
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ PartyUp run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                party_up::utils::error::ErrorSeverity::Low => 0,
                party_up::utils::error::ErrorSeverity::Medium => 2,
                party_up::utils::error::ErrorSeverity::High => 1,
                party_up::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
