//! Presentation configuration for the stepper.
//!
//! Nothing in the stepping engine reads these values; they are carried for the
//! layer that draws the value field and the two buttons.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{
    DECREASE_BUTTON_TEXT, DEFAULT_FONT_SIZE, INCREASE_BUTTON_TEXT, STEPPER_BUTTON_WIDTH,
};

/// Configuration for stepper appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperStyle {
    /// Color of the value text
    pub value_text_color: Color,
    /// Font size of the value text
    pub value_font_size: f32,
    /// Color of the button labels
    pub button_text_color: Color,
    /// Font size of the button labels
    pub button_font_size: f32,
    /// Label of the increase button
    pub increase_button_text: String,
    /// Label of the decrease button
    pub decrease_button_text: String,
    /// Width of the button column
    pub button_width: f32,
}

impl Default for StepperStyle {
    fn default() -> Self {
        Self {
            value_text_color: Color::BLACK,
            value_font_size: DEFAULT_FONT_SIZE,
            button_text_color: Color::BLACK,
            button_font_size: DEFAULT_FONT_SIZE,
            increase_button_text: INCREASE_BUTTON_TEXT.to_string(),
            decrease_button_text: DECREASE_BUTTON_TEXT.to_string(),
            button_width: STEPPER_BUTTON_WIDTH,
        }
    }
}

impl StepperStyle {
    /// Create a new style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value text color.
    pub fn value_text_color(mut self, color: Color) -> Self {
        self.value_text_color = color;
        self
    }

    /// Set the value font size.
    pub fn value_font_size(mut self, size: f32) -> Self {
        self.value_font_size = size;
        self
    }

    /// Set the button label color.
    pub fn button_text_color(mut self, color: Color) -> Self {
        self.button_text_color = color;
        self
    }

    /// Set the button label font size.
    pub fn button_font_size(mut self, size: f32) -> Self {
        self.button_font_size = size;
        self
    }

    /// Set both button labels.
    pub fn button_labels(mut self, increase: impl Into<String>, decrease: impl Into<String>) -> Self {
        self.increase_button_text = increase.into();
        self.decrease_button_text = decrease.into();
        self
    }

    /// Set the button column width.
    pub fn button_width(mut self, width: f32) -> Self {
        self.button_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let style = StepperStyle::default();
        assert_eq!(style.increase_button_text, "+");
        assert_eq!(style.decrease_button_text, "-");
    }

    #[test]
    fn test_builder_chain() {
        let style = StepperStyle::new()
            .button_labels("▲", "▼")
            .value_text_color(Color::WHITE)
            .button_text_color(Color::new(0.2, 0.4, 0.6, 1.0))
            .button_width(32.0);
        assert_eq!(style.increase_button_text, "▲");
        assert_eq!(style.value_text_color, Color::WHITE);
        assert_eq!(style.button_width, 32.0);
        assert_eq!(style.button_text_color.b, 0.6);
    }
}
