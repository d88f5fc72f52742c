use std::io;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::debug;

use meteo_core::{Config, MeteoClient, check_rain};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteocli",
    version,
    about = "meteocli — weather data from MeteoSwiss, right in your terminal",
    long_about = "meteocli is a command-line interface for MeteoSwiss, the Swiss federal\n\
                  meteorological service. It fetches current conditions, multi-day forecasts,\n\
                  and active weather warnings from the MeteoSwiss app backend."
)]
pub struct Cli {
    /// Output JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather conditions for a Swiss postal code.
    Weather {
        /// Swiss postal code (e.g. 8000 for Zurich).
        #[arg(long)]
        zip: Option<u32>,
    },

    /// Show the multi-day weather forecast for a Swiss postal code.
    Forecast {
        /// Swiss postal code (e.g. 8000 for Zurich).
        #[arg(long)]
        zip: Option<u32>,

        /// Number of days to show (1–10).
        #[arg(long, default_value_t = 7)]
        days: usize,
    },

    /// Check if rain is expected within a time window for a Swiss postal code.
    Rain {
        /// Swiss postal code (e.g. 8000 for Zurich).
        #[arg(long)]
        zip: Option<u32>,

        /// Look-ahead window in minutes (1–1440).
        #[arg(long, default_value_t = 30)]
        within: u32,
    },

    /// Show active weather warnings for a Swiss postal code.
    Warnings {
        /// Swiss postal code (e.g. 3000 for Bern).
        #[arg(long)]
        zip: Option<u32>,

        /// Minimum warning level to display (1=Minor … 5=Very high).
        #[arg(long = "min-level", default_value_t = 1)]
        min_level: i32,
    },

    /// Store defaults: postal code and backend URL.
    Configure {
        /// Default Swiss postal code for future invocations.
        #[arg(long)]
        zip: Option<u32>,

        /// Backend base URL override.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print the version number.
    Version,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let as_json = self.json;

        match self.command {
            Command::Weather { zip } => {
                let config = Config::load()?;
                let plz = resolve_zip(zip, &config)?;
                require_plz(plz)?;

                let detail = client(&config)?.plz_detail(plz).await?;
                if as_json {
                    output::print_json(&mut io::stdout(), &detail.current_weather)
                } else {
                    output::print_current_weather(plz, &detail);
                    Ok(())
                }
            }

            Command::Forecast { zip, days } => {
                let config = Config::load()?;
                let plz = resolve_zip(zip, &config)?;
                require_plz(plz)?;
                require_days(days)?;

                let detail = client(&config)?.plz_detail(plz).await?;
                let shown = &detail.forecast[..detail.forecast.len().min(days)];
                if as_json {
                    output::print_json(&mut io::stdout(), &shown)
                } else {
                    output::print_forecast(plz, shown);
                    Ok(())
                }
            }

            Command::Rain { zip, within } => {
                let config = Config::load()?;
                let plz = resolve_zip(zip, &config)?;
                require_plz(plz)?;
                require_within(within)?;

                let detail = client(&config)?.plz_detail(plz).await?;
                let result = check_rain(plz, within, &detail, Utc::now());
                debug!(plz, within, max_rain_mm = result.max_rain_mm, "rain check done");
                if as_json {
                    output::print_json(&mut io::stdout(), &result)
                } else {
                    output::print_rain_check(&result);
                    Ok(())
                }
            }

            Command::Warnings { zip, min_level } => {
                require_min_level(min_level)?;
                let config = Config::load()?;
                let plz = resolve_zip(zip, &config)?;
                require_plz(plz)?;

                let detail = client(&config)?.plz_detail(plz).await?;
                let filtered: Vec<_> = detail
                    .warnings
                    .into_iter()
                    .filter(|w| w.warn_level >= min_level)
                    .collect();
                if as_json {
                    output::print_json(&mut io::stdout(), &filtered)
                } else {
                    output::print_warnings(&filtered);
                    Ok(())
                }
            }

            Command::Configure { zip, base_url } => configure(zip, base_url, Config::load()?),

            Command::Version => {
                println!("meteocli {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Take the postal code from the flag, falling back to the stored default.
fn resolve_zip(flag: Option<u32>, config: &Config) -> Result<u32> {
    match flag {
        Some(plz) => Ok(plz),
        None => config.default_zip(),
    }
}

/// Validate that a postal code looks like a valid Swiss PLZ.
fn require_plz(plz: u32) -> Result<()> {
    if !(1000..=9999).contains(&plz) {
        bail!("invalid Swiss postal code {plz}: must be between 1000 and 9999");
    }
    Ok(())
}

fn require_within(within: u32) -> Result<()> {
    if !(1..=1440).contains(&within) {
        bail!("--within must be between 1 and 1440 minutes");
    }
    Ok(())
}

fn require_days(days: usize) -> Result<()> {
    if !(1..=10).contains(&days) {
        bail!("--days must be between 1 and 10");
    }
    Ok(())
}

fn require_min_level(level: i32) -> Result<()> {
    if !(1..=5).contains(&level) {
        bail!("--min-level must be between 1 and 5");
    }
    Ok(())
}

fn client(config: &Config) -> Result<MeteoClient> {
    let client = match &config.base_url {
        Some(url) => MeteoClient::with_base_url(url),
        None => MeteoClient::new(),
    }?;
    Ok(client)
}

fn configure(zip: Option<u32>, base_url: Option<String>, mut config: Config) -> Result<()> {
    let zip = match zip {
        Some(plz) => Some(plz),
        // No flags at all: ask interactively.
        None if base_url.is_none() => {
            let answer = inquire::Text::new("Default Swiss postal code:")
                .with_help_message("e.g. 8000 for Zurich")
                .prompt()?;
            Some(answer.trim().parse().context("postal code must be a number")?)
        }
        None => None,
    };

    if let Some(plz) = zip {
        require_plz(plz)?;
        config.default_zip = Some(plz);
    }
    if let Some(url) = base_url {
        config.base_url = Some(url);
    }

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}
