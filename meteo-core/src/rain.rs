//! Windowed rain prediction over the two-resolution precipitation graph.
//!
//! The graph carries 10-minute slots anchored at `start` and 1-hour slots
//! anchored at `start_low_resolution`. Both tracks are scanned against the
//! same absolute-time window, so gaps or overlaps between them don't matter.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::{GraphData, PlzDetail};

const HI_SLOT_MS: i64 = 10 * 60 * 1000;
const LO_SLOT_MS: i64 = 60 * 60 * 1000;

/// Structured result of a rain check for one postal code.
#[derive(Debug, Clone, Serialize)]
pub struct RainCheck {
    pub plz: u32,
    pub within_minutes: u32,
    pub rain_expected: bool,
    pub max_rain_mm: f64,
    pub message: String,
}

/// Maximum precipitation (mm) across all graph slots overlapping
/// `[now, now + window]`.
///
/// Returns `None` when the window misses the available data entirely;
/// `Some(0.0)` means slots were observed but all of them were dry, which is
/// a confident "no rain" rather than "no data".
pub fn rain_in_window(graph: &GraphData, now: DateTime<Utc>, window: Duration) -> Option<f64> {
    if graph.start == 0 {
        return None;
    }
    let now_ms = now.timestamp_millis();
    let end_ms = now_ms + window.num_milliseconds();

    let mut max = series_max(graph.start, HI_SLOT_MS, &graph.precipitation_10m, now_ms, end_ms);

    if graph.start_low_resolution != 0 {
        let lo = series_max(
            graph.start_low_resolution,
            LO_SLOT_MS,
            &graph.precipitation_1h,
            now_ms,
            end_ms,
        );
        max = match (max, lo) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    max
}

/// Scan one fixed-width series against the window. Slot `i` covers
/// `[start + i*slot, start + (i+1)*slot)` and counts when
/// `slot_start <= end` and `slot_end > now`.
fn series_max(start_ms: i64, slot_ms: i64, values: &[f64], now_ms: i64, end_ms: i64) -> Option<f64> {
    let mut max: Option<f64> = None;
    for (i, &mm) in values.iter().enumerate() {
        let slot_start = start_ms + i as i64 * slot_ms;
        if slot_start > end_ms {
            break;
        }
        if slot_start + slot_ms <= now_ms {
            continue;
        }
        max = Some(max.map_or(mm, |m| m.max(mm)));
    }
    max
}

/// Decide whether rain is expected within the next `within` minutes.
///
/// Prefers the high-resolution graph; falls back to today's daily total when
/// graph data is absent, and degrades to "unavailable" when there is no data
/// at all. Never fails: absence of data is a legitimate answer, not an error.
pub fn check_rain(plz: u32, within: u32, detail: &PlzDetail, now: DateTime<Utc>) -> RainCheck {
    if let Some(graph) = &detail.graph {
        if !graph.precipitation_10m.is_empty() {
            if let Some(max_mm) = rain_in_window(graph, now, Duration::minutes(i64::from(within))) {
                let rain_expected = max_mm > 0.0;
                let message = if rain_expected {
                    format!("Rain expected: up to {max_mm:.1} mm in the next {within} min")
                } else {
                    format!("No rain expected in the next {within} min")
                };
                return RainCheck {
                    plz,
                    within_minutes: within,
                    rain_expected,
                    max_rain_mm: max_mm,
                    message,
                };
            }
        }
    }

    // Fallback: today's daily total from the forecast.
    if let Some(today) = detail.forecast.first() {
        let rain_expected = today.precipitation > 0.0;
        let message = if rain_expected {
            format!(
                "Rain possible today: {:.1} mm forecast (hourly data unavailable)",
                today.precipitation
            )
        } else {
            "No rain expected today (hourly data unavailable)".to_string()
        };
        return RainCheck {
            plz,
            within_minutes: within,
            rain_expected,
            max_rain_mm: today.precipitation,
            message,
        };
    }

    RainCheck {
        plz,
        within_minutes: within,
        rain_expected: false,
        max_rain_mm: 0.0,
        message: "Rain data unavailable".to_string(),
    }
}
