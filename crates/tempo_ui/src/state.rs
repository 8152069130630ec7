//! State types owned by the stepper

use crate::text_core::{format_value, parse_typed};

/// Which way the stepper is currently stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SteppingState {
    /// Neither increasing nor decreasing
    #[default]
    Normal,
    /// Stepping up, by tap or auto-step
    Increasing,
    /// Stepping down, by tap or auto-step
    Decreasing,
}

impl SteppingState {
    /// Sign applied to the step value, `None` when idle.
    pub fn direction(&self) -> Option<f64> {
        match self {
            SteppingState::Normal => None,
            SteppingState::Increasing => Some(1.0),
            SteppingState::Decreasing => Some(-1.0),
        }
    }
}

/// What the presentation layer needs to draw the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepperVisual {
    pub state: SteppingState,
    pub increase_pressed: bool,
    pub decrease_pressed: bool,
}

impl StepperVisual {
    pub fn for_state(state: SteppingState) -> Self {
        Self {
            state,
            increase_pressed: state == SteppingState::Increasing,
            decrease_pressed: state == SteppingState::Decreasing,
        }
    }
}

/// A value kept inside `[min_value, max_value]`.
///
/// `min_value <= max_value` is the caller's responsibility. With crossed bounds
/// every value collapses to `min_value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperValue {
    value: f64,
    min_value: f64,
    max_value: f64,
    step_value: f64,
}

impl StepperValue {
    pub fn new(value: f64, min_value: f64, max_value: f64, step_value: f64) -> Self {
        let mut v = Self {
            value,
            min_value,
            max_value,
            step_value,
        };
        v.value = v.clamp(value);
        v
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn step_value(&self) -> f64 {
        self.step_value
    }

    /// Clamp to max, then to min. NaN lands on a bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max_value).max(self.min_value)
    }

    /// Store `value` clamped into range and return what was stored.
    pub fn set(&mut self, value: f64) -> f64 {
        self.value = self.clamp(value);
        self.value
    }

    /// Apply one step in `state`'s direction. `None` when `state` is `Normal`.
    pub fn apply_step(&mut self, state: SteppingState) -> Option<f64> {
        let direction = state.direction()?;
        Some(self.set(self.value + direction * self.step_value))
    }

    /// Replace the bounds and re-clamp. Returns true if the value moved.
    pub fn set_range(&mut self, min_value: f64, max_value: f64) -> bool {
        self.min_value = min_value;
        self.max_value = max_value;
        let before = self.value;
        self.set(before) != before
    }

    pub fn set_step(&mut self, step_value: f64) {
        self.step_value = step_value;
    }
}

/// The value field: a projection of the value, or an edit buffer while editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextEntryState {
    /// Current text
    pub text: String,
    /// Whether the field is in edit mode
    pub is_editing: bool,
}

impl TextEntryState {
    pub fn new(value: f64, show_int_value: bool) -> Self {
        Self {
            text: format_value(value, show_int_value),
            is_editing: false,
        }
    }

    /// Replace the text with the projection of `value`.
    pub fn refresh(&mut self, value: f64, show_int_value: bool) {
        self.text = format_value(value, show_int_value);
    }

    /// Append `insert` if the result still reads as a number.
    pub fn try_insert(&mut self, insert: &str) -> bool {
        let candidate = format!("{}{}", self.text, insert);
        match parse_typed(&candidate) {
            Ok(_) => {
                self.text = candidate;
                true
            }
            Err(e) => {
                log::trace!("Stepper: rejected '{}' ({})", insert, e);
                false
            }
        }
    }

    /// Remove the last character. Returns false when already empty.
    pub fn delete_backward(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_invariant_over_step_sequences() {
        let mut v = StepperValue::new(0.0, -2.5, 3.0, 0.7);
        let pattern = [
            SteppingState::Increasing,
            SteppingState::Increasing,
            SteppingState::Decreasing,
        ];
        for i in 0..200 {
            let state = if i < 100 {
                pattern[i % 3]
            } else {
                SteppingState::Decreasing
            };
            v.apply_step(state);
            assert!(v.value() >= v.min_value() && v.value() <= v.max_value());
        }
        assert_eq!(v.value(), -2.5);
    }

    #[test]
    fn test_step_stops_at_bounds() {
        let mut v = StepperValue::new(99.5, 0.0, 100.0, 1.0);
        assert_eq!(v.apply_step(SteppingState::Increasing), Some(100.0));
        assert_eq!(v.apply_step(SteppingState::Increasing), Some(100.0));
        assert_eq!(v.apply_step(SteppingState::Normal), None);
    }

    #[test]
    fn test_zero_step_is_a_no_op() {
        let mut v = StepperValue::new(5.0, 0.0, 10.0, 0.0);
        assert_eq!(v.apply_step(SteppingState::Decreasing), Some(5.0));
    }

    #[test]
    fn test_crossed_bounds_collapse_to_min() {
        let v = StepperValue::new(5.0, 10.0, 0.0, 1.0);
        assert_eq!(v.value(), 10.0);
        assert_eq!(v.clamp(-100.0), 10.0);
    }

    #[test]
    fn test_nan_never_stored() {
        let mut v = StepperValue::new(5.0, 0.0, 10.0, 1.0);
        let stored = v.set(f64::NAN);
        assert!(!stored.is_nan());
    }

    #[test]
    fn test_set_range_reclamps() {
        let mut v = StepperValue::new(50.0, 0.0, 100.0, 1.0);
        assert!(v.set_range(0.0, 20.0));
        assert_eq!(v.value(), 20.0);
        assert!(!v.set_range(-10.0, 20.0));
    }

    #[test]
    fn test_visual_follows_state() {
        let v = StepperVisual::for_state(SteppingState::Decreasing);
        assert!(!v.increase_pressed);
        assert!(v.decrease_pressed);
        assert_eq!(
            StepperVisual::for_state(SteppingState::Normal),
            StepperVisual::default()
        );
    }

    #[test]
    fn test_text_entry_insert_gate() {
        let mut entry = TextEntryState {
            text: String::new(),
            is_editing: true,
        };
        for ch in ["1", "2", ".", "5"] {
            assert!(entry.try_insert(ch));
        }
        assert!(!entry.try_insert("x"));
        assert_eq!(entry.text, "12.5");
    }

    #[test]
    fn test_text_entry_backspace() {
        let mut entry = TextEntryState::new(42.0, true);
        assert!(entry.delete_backward());
        assert!(entry.delete_backward());
        assert!(!entry.delete_backward());
        assert_eq!(entry.text, "");
    }
}
