//! Centralized constants for tempo_ui
//!
//! Default option values, timing, and presentation defaults live here so the
//! engine, the style config, and the host config all agree on them.

use std::time::Duration;

// =============================================================================
// Value
// =============================================================================

/// Initial value of a new stepper
pub const DEFAULT_VALUE: f64 = 0.0;

/// Lower bound of a new stepper
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// Upper bound of a new stepper
pub const DEFAULT_MAX_VALUE: f64 = 100.0;

/// Amount added or subtracted by each step
pub const DEFAULT_STEP_VALUE: f64 = 1.0;

// =============================================================================
// Auto-stepping
// =============================================================================

/// Slow cadence between auto-steps
pub const DEFAULT_AUTO_STEPPING_INTERVAL: Duration = Duration::from_millis(300);

/// Fast cadence between auto-steps
pub const FAST_AUTO_STEPPING_INTERVAL: Duration = Duration::from_millis(100);

/// Hold duration before the first auto-step; shorter presses are taps
pub const AUTO_STEP_AFTER_INTERVAL: Duration = Duration::from_millis(500);

/// Hold duration after which the fast cadence is used
pub const FAST_AUTO_STEP_AFTER_INTERVAL: Duration = Duration::from_secs(2);

// =============================================================================
// Layout
// =============================================================================

/// Width of the stacked increase/decrease buttons
pub const STEPPER_BUTTON_WIDTH: f32 = 20.0;

/// Default font size for the value field and buttons
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

// =============================================================================
// Labels
// =============================================================================

/// Label of the increase button
pub const INCREASE_BUTTON_TEXT: &str = "+";

/// Label of the decrease button
pub const DECREASE_BUTTON_TEXT: &str = "-";
