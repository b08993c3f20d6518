use clap::Parser;
use location_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(location_processor::Error::processing_interrupted(
                    "Processing interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(summary) if summary.is_success() => process::exit(0),
        // Per-country failures have already been reported by the command
        Ok(_) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Location Processor - Postal Code Reference Data Builder");
    println!("=======================================================");
    println!();
    println!("Download postal code data per country, fill in coordinates and");
    println!("administrative areas, resolve ISO 3166-2 region codes and load the");
    println!("result into a partitioned PostgreSQL location table.");
    println!();
    println!("USAGE:");
    println!("    location-processor <COMMAND> --countries <LIST> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    download        Download raw postal code data");
    println!("    enrich          Fill missing coordinates and admin areas (alias: geocode)");
    println!("    normalize       Resolve ISO 3166-2 region codes (alias: map)");
    println!("    export          Write bulk insert statements (alias: sql)");
    println!("    deploy          Load insert statements into a partition");
    println!("    process         Run download through export (main command)");
    println!("    validate        Report region code coverage");
    println!("    drop-partition  Drop the partition of each country");
    println!("    help            Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Build Austria and Belgium up to the insert statements:");
    println!("    location-processor process --countries AT,BE");
    println!();
    println!("    # Rebuild every country in the data directory and deploy to slot b:");
    println!("    location-processor process --countries all --force --deploy --partition b");
    println!();
    println!("    # Check region coverage:");
    println!("    location-processor validate --countries all");
    println!();
    println!("For detailed help on any command, use:");
    println!("    location-processor <COMMAND> --help");
}
