//! AQI classification.
//!
//! Maps a reading to an [`AqiState`]: category label, base color, advisory
//! message, mood symbol, and the two glow tints derived from the color.
//!
//! # Severity Scale
//!
//! | Severity | AQI | Color |
//! |----------|-----|-------|
//! | `unknown` | invalid, negative, non-finite | slate |
//! | `good` | 0-50 | green |
//! | `moderate` | 51-100 | yellow |
//! | `unhealthy-sensitive` | 101-150 | amber |
//! | `unhealthy` | 151-200 | red |
//! | `very-unhealthy` | 201-300 | purple |
//! | `hazardous` | 301+ | maroon |
//!
//! Classification is total: malformed input degrades to `unknown` instead of
//! failing, and the same input always yields the same state.

use core::fmt;

use crate::{
    colors::{
        GOOD_HEX, HAZARDOUS_HEX, MODERATE_HEX, SENSITIVE_HEX, UNHEALTHY_HEX, UNKNOWN_HEX, VERY_UNHEALTHY_HEX,
    },
    thresholds::{
        AQI_GOOD_MAX, AQI_MODERATE_MAX, AQI_SENSITIVE_MAX, AQI_UNHEALTHY_MAX, AQI_VERY_UNHEALTHY_MAX,
        GLOW_FROM_FACTOR, GLOW_TO_FACTOR,
    },
    tint::{TintedColor, tint},
};

/// Closed set of AQI severity buckets, ordered from "no data" to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// No valid reading.
    #[default]
    Unknown,
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Severity {
    /// Every severity, best to worst after `Unknown`.
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Good,
        Self::Moderate,
        Self::UnhealthySensitive,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Stable kebab-case key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::UnhealthySensitive => "unhealthy-sensitive",
            Self::Unhealthy => "unhealthy",
            Self::VeryUnhealthy => "very-unhealthy",
            Self::Hazardous => "hazardous",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Base color as hex.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Unknown => UNKNOWN_HEX,
            Self::Good => GOOD_HEX,
            Self::Moderate => MODERATE_HEX,
            Self::UnhealthySensitive => SENSITIVE_HEX,
            Self::Unhealthy => UNHEALTHY_HEX,
            Self::VeryUnhealthy => VERY_UNHEALTHY_HEX,
            Self::Hazardous => HAZARDOUS_HEX,
        }
    }

    /// Advisory message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Enter a valid AQI to begin.",
            Self::Good => "Air is fresh and clear. Breathe easy.",
            Self::Moderate => "Air is acceptable, but be mindful outdoors.",
            Self::UnhealthySensitive => "Sensitive groups should reduce outdoor activity.",
            Self::Unhealthy => "Air is unhealthy. Limit outdoor exposure.",
            Self::VeryUnhealthy => "Stay indoors and use air purifiers.",
            Self::Hazardous => "Critical! Avoid outdoor air at all costs.",
        }
    }

    /// Mood symbol (emoji).
    pub const fn mood(self) -> &'static str {
        match self {
            Self::Unknown => "\u{1F914}",
            Self::Good => "\u{1F60C}",
            Self::Moderate => "\u{1F642}",
            Self::UnhealthySensitive => "\u{1F637}",
            Self::Unhealthy => "\u{1F61F}",
            Self::VeryUnhealthy => "\u{26A0}\u{FE0F}",
            Self::Hazardous => "\u{1F6A8}",
        }
    }

    /// Severity for a numeric reading.
    ///
    /// Non-finite and negative values are `Unknown`; otherwise the first
    /// inclusive upper bound the value fits under wins.
    pub fn from_aqi(value: f32) -> Self {
        if !value.is_finite() || value < 0.0 {
            Self::Unknown
        } else if value <= AQI_GOOD_MAX {
            Self::Good
        } else if value <= AQI_MODERATE_MAX {
            Self::Moderate
        } else if value <= AQI_SENSITIVE_MAX {
            Self::UnhealthySensitive
        } else if value <= AQI_UNHEALTHY_MAX {
            Self::Unhealthy
        } else if value <= AQI_VERY_UNHEALTHY_MAX {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

/// Everything the dashboard shows for one reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AqiState {
    pub severity: Severity,
    pub category: &'static str,
    pub color: &'static str,
    pub message: &'static str,
    pub mood: &'static str,
    /// `color` brightened by [`GLOW_FROM_FACTOR`].
    pub glow_from: TintedColor<'static>,
    /// `color` darkened by [`GLOW_TO_FACTOR`].
    pub glow_to: TintedColor<'static>,
}

impl AqiState {
    /// Build the state for a severity bucket.
    pub fn for_severity(severity: Severity) -> Self {
        let color = severity.color_hex();
        Self {
            severity,
            category: severity.label(),
            color,
            message: severity.message(),
            mood: severity.mood(),
            glow_from: tint(color, GLOW_FROM_FACTOR),
            glow_to: tint(color, GLOW_TO_FACTOR),
        }
    }
}

/// Classify a numeric reading.
#[inline]
pub fn classify(value: f32) -> AqiState { AqiState::for_severity(Severity::from_aqi(value)) }

/// Parse user text into a reading.
///
/// Surrounding whitespace is ignored. Empty text is not a reading.
/// Only finite, non-negative numbers are accepted.
pub fn parse_reading(text: &str) -> Option<f32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Classify raw user text; anything that is not a reading is `unknown`.
#[inline]
pub fn classify_text(text: &str) -> AqiState { parse_reading(text).map_or_else(|| classify(f32::NAN), classify) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: f32) -> &'static str { classify(value).severity.key() }

    #[test]
    fn test_good_range() {
        for v in 0..=50 {
            assert_eq!(key(v as f32), "good", "AQI {v} should be good");
        }
        assert_eq!(key(0.0), "good");
        assert_eq!(key(-0.0), "good", "negative zero is still zero");
    }

    #[test]
    fn test_boundaries() {
        let cases = [
            (50.0, "good"),
            (51.0, "moderate"),
            (100.0, "moderate"),
            (101.0, "unhealthy-sensitive"),
            (150.0, "unhealthy-sensitive"),
            (151.0, "unhealthy"),
            (200.0, "unhealthy"),
            (201.0, "very-unhealthy"),
            (300.0, "very-unhealthy"),
            (301.0, "hazardous"),
            (999_999.0, "hazardous"),
        ];
        for (value, expected) in cases {
            assert_eq!(key(value), expected, "AQI {value}");
        }
    }

    #[test]
    fn test_fractional_values_use_inclusive_bounds() {
        assert_eq!(key(50.5), "moderate");
        assert_eq!(key(300.01), "hazardous");
    }

    #[test]
    fn test_invalid_numbers_are_unknown() {
        for value in [-1.0, -0.5, -300.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(key(value), "unknown", "{value} should be unknown");
        }
    }

    #[test]
    fn test_invalid_text_is_unknown() {
        for text in ["", "   ", "abc", "-5", "12abc", "inf", "NaN", "1e40"] {
            assert_eq!(
                classify_text(text).severity,
                Severity::Unknown,
                "{text:?} should be unknown"
            );
        }
    }

    #[test]
    fn test_text_classification() {
        assert_eq!(classify_text("87").severity, Severity::Moderate);
        assert_eq!(classify_text(" 42 ").severity, Severity::Good);
        assert_eq!(classify_text("0").severity, Severity::Good);
        assert_eq!(classify_text("500").severity, Severity::Hazardous);
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading("87"), Some(87.0));
        assert_eq!(parse_reading("007"), Some(7.0));
        assert_eq!(parse_reading(""), None);
        assert_eq!(parse_reading("-3"), None);
        assert_eq!(parse_reading("x"), None);
    }

    #[test]
    fn test_state_fields_match_table() {
        let state = classify(87.0);
        assert_eq!(state.category, "Moderate");
        assert_eq!(state.color, "#eab308");
        assert_eq!(state.message, "Air is acceptable, but be mindful outdoors.");
        assert_eq!(state.mood, "\u{1F642}");

        let unknown = classify(-1.0);
        assert_eq!(unknown.category, "Unknown");
        assert_eq!(unknown.color, "#94a3b8");
        assert_eq!(unknown.message, "Enter a valid AQI to begin.");
    }

    #[test]
    fn test_glow_is_derived_from_color() {
        for severity in Severity::ALL {
            let state = AqiState::for_severity(severity);
            assert_eq!(state.glow_from, tint(state.color, 1.35), "{severity} glow_from");
            assert_eq!(state.glow_to, tint(state.color, 0.70), "{severity} glow_to");
            assert!(state.glow_from.rgb().is_some(), "{severity} palette color must parse");
        }
    }

    #[test]
    fn test_classification_is_pure() {
        assert_eq!(classify(175.0), classify(175.0));
        assert_eq!(classify_text("175"), classify(175.0));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Good < Severity::Hazardous);
        assert_eq!(Severity::default(), Severity::Unknown);
        let keys: Vec<_> = Severity::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            [
                "unknown",
                "good",
                "moderate",
                "unhealthy-sensitive",
                "unhealthy",
                "very-unhealthy",
                "hazardous"
            ]
        );
    }
}
