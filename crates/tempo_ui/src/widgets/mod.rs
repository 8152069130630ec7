// Widget implementations

mod config;
mod stepper;

pub use config::StepperStyle;
pub use stepper::{AutoStepTiming, Stepper, StepperOptions};
