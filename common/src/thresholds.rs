//! Centralized AQI threshold configuration.
//!
//! All thresholds are inclusive upper bounds on the US EPA AQI scale and are
//! evaluated in ascending order by [`crate::aqi::classify`]. The first bound
//! that the value does not exceed wins; anything above
//! [`AQI_VERY_UNHEALTHY_MAX`] is hazardous.
//!
//! # Compile-Time Validation
//!
//! The `const` assertions below verify threshold ordering at compile time.
//! If a bound is configured out of order, compilation fails.

// =============================================================================
// AQI Category Upper Bounds (inclusive)
// =============================================================================

/// Highest AQI still considered "Good" (0-50).
pub const AQI_GOOD_MAX: f32 = 50.0;

/// Highest AQI still considered "Moderate" (51-100).
pub const AQI_MODERATE_MAX: f32 = 100.0;

/// Highest AQI still considered "Unhealthy for Sensitive" (101-150).
pub const AQI_SENSITIVE_MAX: f32 = 150.0;

/// Highest AQI still considered "Unhealthy" (151-200).
pub const AQI_UNHEALTHY_MAX: f32 = 200.0;

/// Highest AQI still considered "Very Unhealthy" (201-300).
/// Everything above is hazardous.
pub const AQI_VERY_UNHEALTHY_MAX: f32 = 300.0;

const _: () = assert!(AQI_GOOD_MAX > 0.0);
const _: () = assert!(AQI_GOOD_MAX < AQI_MODERATE_MAX);
const _: () = assert!(AQI_MODERATE_MAX < AQI_SENSITIVE_MAX);
const _: () = assert!(AQI_SENSITIVE_MAX < AQI_UNHEALTHY_MAX);
const _: () = assert!(AQI_UNHEALTHY_MAX < AQI_VERY_UNHEALTHY_MAX);

// =============================================================================
// Glow Tint Factors
// =============================================================================

/// Channel multiplier for the bright end of the avatar glow gradient.
pub const GLOW_FROM_FACTOR: f32 = 1.35;

/// Channel multiplier for the dark end of the avatar glow gradient.
pub const GLOW_TO_FACTOR: f32 = 0.70;

const _: () = assert!(GLOW_TO_FACTOR < 1.0);
const _: () = assert!(GLOW_FROM_FACTOR > 1.0);

/// Whether a reading is in the range where people should stay indoors.
///
/// Used by the renderer to switch the avatar into its alarmed animation.
#[inline]
pub fn is_alarming(aqi: f32) -> bool { aqi > AQI_UNHEALTHY_MAX }

// =============================================================================
// Unit Tests
// =============================================================================
