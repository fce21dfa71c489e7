//! `holidaze-avail` CLI — check venue availability against exported bookings.
//!
//! Bookings are a JSON array of Holidaze API booking objects
//! (`dateFrom`/`dateTo`), read from `--bookings` or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a stay (exit code 2 when the dates are not bookable)
//! holidaze-avail check --from 2024-06-06 --to 2024-06-09 -b bookings.json
//!
//! # Pin "now" for reproducible results
//! holidaze-avail check --from 2024-06-06 --to 2024-06-09 --now 2024-05-20T09:00:00 < bookings.json
//!
//! # List occupied days in June (one per line)
//! holidaze-avail occupied --from 2024-06-01 --to 2024-06-30 -b bookings.json
//!
//! # List free ranges, letting checkout days be re-booked
//! holidaze-avail --policy half-open free --from 2024-06-01 --to 2024-06-30 -b bookings.json
//!
//! # Nights and total price
//! holidaze-avail stay --from 2024-06-01 --to 2024-06-04 --rate 120
//! ```

use anyhow::{Context, Result};
use availability_engine::{
    available_ranges, compute_stay, occupied_dates, parse_api_date, parse_now, parse_timezone,
    quote, validate_range_with_policy, BookingInterval, DateRange, EngineConfig, OverlapPolicy,
};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "holidaze-avail",
    version,
    about = "Holidaze venue availability CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file with `overlap_policy` and `timezone`
    #[arg(long, global = true)]
    config: Option<String>,

    /// Boundary policy: "inclusive" or "half-open" (overrides the config file)
    #[arg(long, global = true)]
    policy: Option<String>,

    /// IANA timezone API timestamps are converted into (overrides the config file)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Span {
    /// Check-in (or window start) date, e.g. 2024-06-01
    #[arg(long)]
    from: String,
    /// Checkout (or window end) date, e.g. 2024-06-04
    #[arg(long)]
    to: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a candidate stay; prints the result as JSON
    Check {
        #[command(flatten)]
        span: Span,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// Reference moment (defaults to the current time in --timezone)
        #[arg(long)]
        now: Option<String>,
    },
    /// List occupied days inside a window, one per line
    Occupied {
        #[command(flatten)]
        span: Span,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
    },
    /// List free date ranges inside a window, one `start..end` per line
    Free {
        #[command(flatten)]
        span: Span,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
    },
    /// Show nights in a stay, and the total price when a nightly rate is given
    Stay {
        #[command(flatten)]
        span: Span,
        /// Nightly rate
        #[arg(long)]
        rate: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = resolve_config(
        cli.config.as_deref(),
        cli.policy.as_deref(),
        cli.timezone.as_deref(),
    )?;
    debug!(policy = ?config.overlap_policy, timezone = %config.timezone, "resolved config");

    match cli.command {
        Commands::Check {
            span,
            bookings,
            now,
        } => {
            let candidate = parse_span(&span, config.timezone)?;
            let existing = read_bookings(bookings.as_deref(), config.timezone)?;
            let now = match now {
                Some(s) => parse_now(&s, config.timezone).context("Invalid --now value")?,
                None => Utc::now().with_timezone(&config.timezone).naive_local(),
            };

            let result =
                validate_range_with_policy(&candidate, &existing, now, config.overlap_policy);
            info!(valid = result.valid, reason = ?result.reason, "checked range");

            let output = serde_json::json!({
                "valid": result.valid,
                "reason": result.reason,
                "message": result.reason.message(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);

            if !result.valid {
                process::exit(2);
            }
        }
        Commands::Occupied { span, bookings } => {
            let window = parse_span(&span, config.timezone)?;
            let existing = read_bookings(bookings.as_deref(), config.timezone)?;

            for day in occupied_dates(&existing, &window, config.overlap_policy) {
                println!("{}", day);
            }
        }
        Commands::Free { span, bookings } => {
            let window = parse_span(&span, config.timezone)?;
            let existing = read_bookings(bookings.as_deref(), config.timezone)?;

            for range in available_ranges(&existing, &window, config.overlap_policy) {
                println!("{}..{}", range.start, range.end);
            }
        }
        Commands::Stay { span, rate } => {
            let range = parse_span(&span, config.timezone)?;
            match rate {
                Some(rate) => {
                    let q = quote(&range, rate).context("Failed to quote stay")?;
                    println!("Nights:       {}", q.nights);
                    println!("Nightly rate: {:.2}", q.nightly_rate);
                    println!("Total price:  {:.2}", q.total_price);
                }
                None => {
                    let stay = compute_stay(&range).context("Failed to compute stay")?;
                    println!("Nights:       {}", stay.nights);
                }
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over the `--verbose` default.
fn init_logger(verbose: bool) {
    let default = if verbose {
        "availability_engine=debug,holidaze_avail=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Build the engine config from an optional TOML file, then apply flag overrides.
fn resolve_config(
    path: Option<&str>,
    policy: Option<&str>,
    timezone: Option<&str>,
) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            toml::from_str::<EngineConfig>(&raw)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => EngineConfig::default(),
    };

    if let Some(policy) = policy {
        config.overlap_policy = policy.parse::<OverlapPolicy>().map_err(anyhow::Error::msg)?;
    }
    if let Some(tz) = timezone {
        config.timezone = parse_timezone(tz)?;
    }

    Ok(config)
}

fn parse_span(span: &Span, tz: Tz) -> Result<DateRange> {
    let start = parse_api_date(&span.from, tz).context("Invalid --from date")?;
    let end = parse_api_date(&span.to, tz).context("Invalid --to date")?;
    Ok(DateRange::new(start, end))
}

fn read_bookings(path: Option<&str>, tz: Tz) -> Result<Vec<BookingInterval>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bookings file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read bookings from stdin")?;
            buf
        }
    };

    let intervals = availability_engine::intervals_from_json(&json, tz)
        .context("Failed to parse bookings")?;
    debug!(count = intervals.len(), "loaded bookings");
    Ok(intervals)
}
