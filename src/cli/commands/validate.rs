//! Validate command implementation
//!
//! Reads each country's normalized artifact and reports subdivisions without
//! entries and entries whose region code is missing or unknown.

use super::shared::{
    RunSummary, build_pipeline, load_configuration, resolve_countries, setup_logging,
};
use crate::Result;
use crate::app::models::CountryKey;
use crate::app::services::validation::{InvalidEntry, ValidationReport};
use crate::cli::args::RunArgs;
use colored::Colorize;
use std::time::Instant;
use tracing::{info, warn};

/// Entries listed per country before the output is truncated
const MAX_LISTED_ENTRIES: usize = 20;

/// Validate command runner
///
/// A country fails when its artifact cannot be read or when the report
/// is not clean.
pub async fn run_validate(args: &RunArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    args.validate()?;
    let config = load_configuration(args)?;
    setup_logging(args, &config.logging)?;

    let pipeline = build_pipeline(&config, args).await?;
    let keys = resolve_countries(&args.countries, pipeline.store())?;
    info!("Validating {} countries", keys.len());

    let mut summary = RunSummary {
        countries: keys.len(),
        ..RunSummary::default()
    };

    for key in keys {
        match pipeline.validate(&key).await {
            Ok(report) => {
                if !args.quiet {
                    print_report(&key, &report);
                }
                if report.is_clean() {
                    summary.succeeded += 1;
                } else {
                    summary
                        .failures
                        .push((key.to_string(), describe_failure(&report)));
                }
            }
            Err(e) => {
                warn!("{}: validation failed: {}", key, e);
                summary.failures.push((key.to_string(), e.to_string()));
            }
        }
    }

    summary.elapsed = start_time.elapsed();
    if !args.quiet {
        summary.print();
    }

    Ok(summary)
}

fn describe_failure(report: &ValidationReport) -> String {
    match report {
        ValidationReport::Checked {
            missing_regions,
            invalid,
            ..
        } => format!(
            "{} regions without entries, {} invalid entries",
            missing_regions.len(),
            invalid.len()
        ),
        ValidationReport::Empty | ValidationReport::NotValidatable { .. } => String::new(),
    }
}

fn describe_entry(entry: &InvalidEntry) -> String {
    match entry {
        InvalidEntry::WrongCountry {
            postal_code,
            country_code,
        } => format!("{}: country code {}", postal_code, country_code),
        InvalidEntry::MissingRegion { postal_code } => format!("{}: no region code", postal_code),
        InvalidEntry::UnknownRegion {
            postal_code,
            region_code,
        } => format!("{}: unknown region code {}", postal_code, region_code),
    }
}

fn print_report(key: &CountryKey, report: &ValidationReport) {
    match report {
        ValidationReport::Empty => {
            println!("{} {}: no entries", "-".yellow(), key.to_string().bold());
        }
        ValidationReport::NotValidatable { country_code } => {
            println!(
                "{} {}: no subdivisions known for {}",
                "-".yellow(),
                key.to_string().bold(),
                country_code
            );
        }
        ValidationReport::Checked {
            total,
            missing_regions,
            invalid,
            ..
        } => {
            let marker = if report.is_clean() {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            println!(
                "{} {}: {} entries, {} invalid",
                marker,
                key.to_string().bold(),
                total,
                invalid.len()
            );

            if !missing_regions.is_empty() {
                println!("    regions without entries: {}", missing_regions.join(", "));
            }
            for entry in invalid.iter().take(MAX_LISTED_ENTRIES) {
                println!("    {}", describe_entry(entry));
            }
            if invalid.len() > MAX_LISTED_ENTRIES {
                println!("    ... and {} more", invalid.len() - MAX_LISTED_ENTRIES);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_failure() {
        let report = ValidationReport::Checked {
            country_code: "LU".to_string(),
            total: 3,
            missing_regions: vec!["LU-RD".to_string()],
            invalid: vec![InvalidEntry::MissingRegion {
                postal_code: "9999".to_string(),
            }],
        };
        assert_eq!(
            describe_failure(&report),
            "1 regions without entries, 1 invalid entries"
        );
    }

    #[test]
    fn test_describe_entry() {
        let entry = InvalidEntry::UnknownRegion {
            postal_code: "5555".to_string(),
            region_code: "XX".to_string(),
        };
        assert_eq!(describe_entry(&entry), "5555: unknown region code XX");
    }
}
