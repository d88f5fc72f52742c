//! Read-only label tables for the numeric codes used by the backend:
//! weather icons, warning types and severities, wind directions.

/// Short text description and emoji for a MeteoSwiss icon code (1–42).
fn icon_parts(code: i32) -> Option<(&'static str, &'static str)> {
    let parts = match code {
        1 => ("Sunny", "☀️"),
        2 => ("Mostly sunny", "🌤️"),
        3 => ("Partly cloudy", "⛅"),
        4 => ("Mostly cloudy", "🌥️"),
        5 => ("Overcast", "☁️"),
        6 => ("Fog", "🌫️"),
        7 => ("Light rain showers", "🌦️"),
        8 => ("Rain showers", "🌧️"),
        9 => ("Heavy rain showers", "🌧️"),
        10 => ("Thunderstorm", "⛈️"),
        11 => ("Light snowfall", "🌨️"),
        12 => ("Snowfall", "❄️"),
        13 => ("Heavy snowfall", "❄️"),
        14 => ("Sleet", "🌨️"),
        15 => ("Freezing rain", "🌧️"),
        16 => ("Clear night", "🌙"),
        17 => ("Mostly clear night", "🌙"),
        18 => ("Partly cloudy night", "🌙"),
        19 => ("Mostly cloudy night", "☁️"),
        20 => ("Fog night", "🌫️"),
        21 => ("Light rain showers night", "🌧️"),
        22 => ("Rain showers night", "🌧️"),
        23 => ("Heavy rain showers night", "🌧️"),
        24 => ("Thunderstorm night", "⛈️"),
        25 => ("Light snowfall night", "🌨️"),
        26 => ("Snowfall night", "❄️"),
        27 => ("Heavy snowfall night", "❄️"),
        28 => ("Sleet night", "🌨️"),
        29 => ("Freezing rain night", "🌧️"),
        30 => ("Sunny intervals", "🌤️"),
        31 => ("Mostly sunny intervals", "🌤️"),
        32 => ("Light drizzle", "🌦️"),
        33 => ("Drizzle", "🌧️"),
        34 => ("Light rain", "🌦️"),
        35 => ("Rain", "🌧️"),
        36 => ("Heavy rain", "🌧️"),
        37 => ("Hail", "⛈️"),
        38 => ("Light snow", "🌨️"),
        39 => ("Snow", "❄️"),
        40 => ("Heavy snow", "❄️"),
        41 => ("Thunderstorm with hail", "⛈️"),
        42 => ("Blowing snow", "❄️"),
        _ => return None,
    };
    Some(parts)
}

/// Short text label for a weather icon code; `"Unknown"` for codes outside
/// the documented range.
pub fn icon_description(code: i32) -> &'static str {
    icon_parts(code).map_or("Unknown", |(desc, _)| desc)
}

/// Emoji approximation for a weather icon code; `"?"` when unknown.
pub fn icon_emoji(code: i32) -> &'static str {
    icon_parts(code).map_or("?", |(_, emoji)| emoji)
}

/// Human-readable name for a warning type code.
pub fn warn_type_label(code: i32) -> Option<&'static str> {
    let label = match code {
        0 => "Wind",
        1 => "Thunderstorm",
        2 => "Rain",
        3 => "Snow",
        4 => "Slippery roads",
        5 => "Frost",
        6 => "Heat",
        7 => "Avalanche",
        8 => "Fire danger",
        9 => "Flooding",
        10 => "UV",
        _ => return None,
    };
    Some(label)
}

/// Human-readable severity for a warning level (1–5).
pub fn warn_level_label(level: i32) -> Option<&'static str> {
    let label = match level {
        1 => "Minor",
        2 => "Moderate",
        3 => "Considerable",
        4 => "High",
        5 => "Very high",
        _ => return None,
    };
    Some(label)
}

const WIND_DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a wind direction in degrees; `"—"` for
/// negative (missing) values.
pub fn wind_direction_label(deg: i32) -> &'static str {
    if deg < 0 {
        return "—";
    }
    let idx = ((f64::from(deg) + 11.25) / 22.5) as usize % 16;
    WIND_DIRECTIONS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_description_known_codes() {
        let cases = [
            (1, "Sunny"),
            (3, "Partly cloudy"),
            (10, "Thunderstorm"),
            (16, "Clear night"),
            (42, "Blowing snow"),
        ];
        for (code, want) in cases {
            assert_eq!(icon_description(code), want, "code {code}");
        }
    }

    #[test]
    fn icon_description_unknown_code() {
        for code in [0, 43, -1, 999] {
            assert_eq!(icon_description(code), "Unknown", "code {code}");
        }
    }

    #[test]
    fn icon_emoji_known_codes() {
        let cases = [(1, "☀️"), (5, "☁️"), (10, "⛈️"), (12, "❄️")];
        for (code, want) in cases {
            assert_eq!(icon_emoji(code), want, "code {code}");
        }
    }

    #[test]
    fn icon_emoji_unknown_code() {
        for code in [0, 43, 100] {
            assert_eq!(icon_emoji(code), "?", "code {code}");
        }
    }

    #[test]
    fn icon_table_covers_all_42_codes() {
        for code in 1..=42 {
            assert!(icon_parts(code).is_some(), "missing entry for icon code {code}");
        }
    }

    #[test]
    fn warn_type_labels() {
        assert_eq!(warn_type_label(0), Some("Wind"));
        assert_eq!(warn_type_label(7), Some("Avalanche"));
        assert_eq!(warn_type_label(10), Some("UV"));
        assert_eq!(warn_type_label(11), None);
        assert_eq!(warn_type_label(-1), None);
    }

    #[test]
    fn warn_level_labels() {
        assert_eq!(warn_level_label(1), Some("Minor"));
        assert_eq!(warn_level_label(5), Some("Very high"));
        assert_eq!(warn_level_label(0), None);
        assert_eq!(warn_level_label(6), None);
    }

    #[test]
    fn wind_direction_cardinal_points() {
        let cases = [
            (0, "N"),
            (90, "E"),
            (180, "S"),
            (270, "W"),
            (360, "N"), // wraps back to North
            (45, "NE"),
            (135, "SE"),
            (225, "SW"),
            (315, "NW"),
            (11, "N"),   // just inside the N bucket
            (12, "NNE"), // just inside the NNE bucket
        ];
        for (deg, want) in cases {
            assert_eq!(wind_direction_label(deg), want, "deg {deg}");
        }
    }

    #[test]
    fn wind_direction_negative() {
        assert_eq!(wind_direction_label(-1), "—");
    }
}
