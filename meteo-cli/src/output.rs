//! Human-readable and JSON rendering of fetched weather data.

use std::io::Write;

use anyhow::Result;
use chrono::Local;
use meteo_core::labels::{icon_description, icon_emoji, warn_level_label, warn_type_label};
use meteo_core::model::{DayForecast, PlzDetail, Warning, millis_to_utc};
use meteo_core::rain::RainCheck;
use serde::Serialize;

/// Serialize `value` as indented JSON followed by a newline.
pub fn print_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Write `err` to `w`; with `as_json` it uses a JSON envelope so scripted
/// callers always get parseable output.
pub fn write_error<W: Write>(w: &mut W, as_json: bool, err: &anyhow::Error) -> Result<()> {
    if as_json {
        return print_json(w, &serde_json::json!({ "error": format!("{err:#}") }));
    }
    writeln!(w, "Error: {err:#}")?;
    Ok(())
}

/// Print a separator line of `n` box-drawing dashes.
fn sep(n: usize) {
    println!("{}", "─".repeat(n));
}

pub fn print_current_weather(plz: u32, detail: &PlzDetail) {
    let cw = &detail.current_weather;

    sep(44);
    println!("  Weather for PLZ {plz}");
    sep(44);
    println!("  {} ({})", icon_description(cw.icon), icon_emoji(cw.icon));
    println!("  Temperature : {:.1} °C", cw.temperature);
    if let Some(t) = millis_to_utc(cw.time) {
        println!("  Observed at : {}", t.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
    }
    sep(44);

    // Today's forecast summary, when available.
    if let Some(today) = detail.forecast.first() {
        println!(
            "  Today       : {:.1} / {:.1} °C  rain {:.1} mm",
            today.temperature_min, today.temperature_max, today.precipitation
        );
        sep(44);
    }
}

pub fn print_forecast(plz: u32, forecast: &[DayForecast]) {
    sep(60);
    println!("  {}-day forecast for PLZ {}", forecast.len(), plz);
    sep(60);
    println!("  {:<12} {:<22} {:>6} {:>6}  {:>8}", "Date", "Conditions", "Min°C", "Max°C", "Rain mm");
    sep(60);

    for day in forecast {
        let label = format!("{} ({})", icon_description(day.icon_day), icon_emoji(day.icon_day));
        println!(
            "  {:<12} {:<22} {:>6.1} {:>6.1}  {:>8.1}",
            day.day_date,
            truncate(&label, 22),
            day.temperature_min,
            day.temperature_max,
            day.precipitation,
        );
    }
    sep(60);
}

pub fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        println!("No active weather warnings.");
        return;
    }

    sep(60);
    println!("  {} active warning(s)", warnings.len());
    sep(60);

    for (i, w) in warnings.iter().enumerate() {
        let wtype = warn_type_label(w.warn_type)
            .map_or_else(|| format!("Type {}", w.warn_type), str::to_string);
        let wlevel = warn_level_label(w.warn_level)
            .map_or_else(|| format!("Level {}", w.warn_level), str::to_string);

        println!("  [{}] {} — {}", i + 1, wtype, wlevel);
        if !w.headline.is_empty() {
            println!("      {}", w.headline);
        }
        if !w.valid_from.is_empty() || !w.valid_to.is_empty() {
            println!("      {} → {}", w.valid_from, w.valid_to);
        }
        if !w.regions.is_empty() {
            println!("      Regions: {}", w.regions.join(", "));
        }
        if i < warnings.len() - 1 {
            println!();
        }
    }
    sep(60);
}

pub fn print_rain_check(r: &RainCheck) {
    let icon = if r.rain_expected { "🌧️" } else { "☀️" };
    sep(50);
    println!("  Rain check for PLZ {}  (next {} min)", r.plz, r.within_minutes);
    sep(50);
    println!("  {}  {}", icon, r.message);
    sep(50);
}

/// Shorten `s` to at most `n` characters, ending with `…` when cut.
fn truncate(s: &str, n: usize) -> String {
    if s.chars().count() <= n {
        return s.to_string();
    }
    let mut out: String = s.chars().take(n.saturating_sub(1)).collect();
    out.push('…');
    out
}
