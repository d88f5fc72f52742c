//! Core library for the `meteocli` command-line tool.
//!
//! This crate defines:
//! - The client for the MeteoSwiss app backend (one endpoint: `plzDetail`)
//! - Shared domain models for its JSON payload
//! - Label tables for icon, warning and wind-direction codes
//! - The windowed rain prediction logic
//! - On-disk configuration handling
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod labels;
pub mod model;
pub mod rain;

pub use client::{ApiError, MeteoClient};
pub use config::Config;
pub use model::{CurrentWeather, DayForecast, GraphData, PlzDetail, Warning};
pub use rain::{RainCheck, check_rain, rain_in_window};
