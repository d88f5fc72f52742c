use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from the MeteoSwiss app backend for a given Swiss postal code.
///
/// Every section may be absent or empty; partial payloads are normal (some
/// PLZ codes have no precipitation graph, some have no active warnings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlzDetail {
    #[serde(default)]
    pub current_weather: CurrentWeather,

    #[serde(default)]
    pub forecast: Vec<DayForecast>,

    #[serde(default)]
    pub warnings: Vec<Warning>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
}

/// Current observed conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Observation time, Unix milliseconds. 0 when the backend omits it.
    #[serde(default)]
    pub time: i64,

    #[serde(default)]
    pub icon: i32,

    #[serde(default)]
    pub temperature: f64,
}

/// A single day's forecast entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    #[serde(default)]
    pub day_date: String,

    #[serde(default)]
    pub icon_day: i32,

    #[serde(default)]
    pub temperature_max: f64,

    #[serde(default)]
    pub temperature_min: f64,

    #[serde(default)]
    pub precipitation: f64,

    #[serde(default)]
    pub precipitation_min: f64,

    #[serde(default)]
    pub precipitation_max: f64,
}

/// Precipitation data backing the `rain` command.
///
/// Two tracks of differing resolution: 10-minute slots anchored at `start`,
/// then 1-hour slots anchored at `start_low_resolution`. Both anchors are
/// Unix milliseconds; an anchor of 0 means the track is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphData {
    #[serde(default)]
    pub start: i64,

    #[serde(default)]
    pub start_low_resolution: i64,

    #[serde(default, rename = "precipitation10m")]
    pub precipitation_10m: Vec<f64>,

    #[serde(default, rename = "precipitation1h")]
    pub precipitation_1h: Vec<f64>,
}

/// An active weather warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    #[serde(default)]
    pub warn_type: i32,

    #[serde(default)]
    pub warn_level: i32,

    #[serde(default)]
    pub valid_from: String,

    #[serde(default)]
    pub valid_to: String,

    #[serde(default)]
    pub regions: Vec<String>,

    #[serde(default)]
    pub headline: String,

    #[serde(default)]
    pub body: String,
}

/// Convert a Unix-millisecond timestamp from the backend to a UTC instant.
/// Returns `None` for 0 (the backend's "not set") and out-of-range values.
pub fn millis_to_utc(ms: i64) -> Option<DateTime<Utc>> {
    if ms == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Realistic payload with integer millisecond timestamps; guards against
    // type drift between the structs and the actual wire format.
    const SAMPLE: &str = r#"{
        "currentWeather": {"time": 1740052800000, "icon": 3, "temperature": 7.2},
        "forecast": [
            {
                "dayDate": "2026-02-20",
                "iconDay": 2,
                "temperatureMax": 8.0,
                "temperatureMin": 2.0,
                "precipitation": 0.5
            }
        ],
        "warnings": [
            {"warnType": 2, "warnLevel": 3, "headline": "Heavy rain expected"}
        ],
        "graph": {
            "start": 1740052800000,
            "startLowResolution": 1740060000000,
            "precipitation10m": [0.0, 0.2, 0.0],
            "precipitation1h": [0.5, 1.2]
        }
    }"#;

    #[test]
    fn decodes_realistic_payload() {
        let detail: PlzDetail = serde_json::from_str(SAMPLE).expect("payload should decode");

        assert_eq!(detail.current_weather.time, 1_740_052_800_000);
        assert_eq!(detail.current_weather.icon, 3);
        assert_eq!(detail.current_weather.temperature, 7.2);

        assert_eq!(detail.forecast.len(), 1);
        assert_eq!(detail.forecast[0].day_date, "2026-02-20");
        assert_eq!(detail.forecast[0].temperature_min, 2.0);

        assert_eq!(detail.warnings.len(), 1);
        assert_eq!(detail.warnings[0].warn_level, 3);
        assert_eq!(detail.warnings[0].headline, "Heavy rain expected");

        let graph = detail.graph.expect("graph should be present");
        assert_eq!(graph.start, 1_740_052_800_000);
        assert_eq!(graph.start_low_resolution, 1_740_060_000_000);
        assert_eq!(graph.precipitation_10m.len(), 3);
        assert_eq!(graph.precipitation_1h.len(), 2);
    }

    #[test]
    fn decodes_minimal_payload() {
        let detail: PlzDetail = serde_json::from_str("{}").expect("empty object should decode");

        assert_eq!(detail.current_weather.time, 0);
        assert!(detail.forecast.is_empty());
        assert!(detail.warnings.is_empty());
        assert!(detail.graph.is_none());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let detail: PlzDetail = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&detail).unwrap();

        assert!(value.get("currentWeather").is_some());
        assert!(value["forecast"][0].get("dayDate").is_some());
        assert!(value["graph"].get("startLowResolution").is_some());
        assert!(value["graph"].get("precipitation10m").is_some());
        assert!(value["graph"].get("precipitation1h").is_some());
        assert!(value["warnings"][0].get("warnType").is_some());
    }

    #[test]
    fn millis_to_utc_zero_is_none() {
        assert!(millis_to_utc(0).is_none());
    }

    #[test]
    fn millis_to_utc_roundtrip() {
        let t = millis_to_utc(1_740_052_800_000).expect("valid timestamp");
        assert_eq!(t.timestamp_millis(), 1_740_052_800_000);
    }
}
