//! tempo_ui - A headless numeric stepper with press-and-hold auto-stepping
//!
//! The crate owns the interaction logic of a stepper control: tap and hold
//! classification, the self-rescheduling auto-step timer, region hit-testing,
//! value clamping, and typed input. Rendering is left to the host, which
//! subscribes to value and button-state notifications.
//!
//! ```
//! use std::time::Duration;
//! use tempo_ui::prelude::*;
//!
//! let clock = ManualClock::new();
//! let mut stepper = Stepper::new(
//!     StepperOptions::default(),
//!     clock.clone(),
//!     DeadlineScheduler::new(clock.clone()),
//! )
//! .layout(StepperLayout::arrange(Bounds::new(0.0, 0.0, 100.0, 40.0), 20.0));
//!
//! stepper.on_event(&Event::press(90.0, 5.0));
//! clock.advance(Duration::from_millis(100));
//! stepper.on_event(&Event::release(90.0, 5.0));
//! assert_eq!(stepper.value(), 1.0);
//! ```

mod callback;
mod clock;
mod color;
pub mod constants;
mod event;
mod layout;
mod scheduler;
mod state;
pub mod text_core;
mod widgets;

pub use callback::Callback;
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::Color;
pub use event::Event;
pub use layout::{Bounds, Point, Region, StepperLayout};
pub use scheduler::{DeadlineScheduler, Scheduler, TimerToken};
pub use state::{StepperValue, StepperVisual, SteppingState, TextEntryState};
pub use text_core::NumberParseError;
pub use widgets::{AutoStepTiming, Stepper, StepperOptions, StepperStyle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::event::Event;
    pub use crate::layout::{Bounds, Point, StepperLayout};
    pub use crate::scheduler::{DeadlineScheduler, Scheduler};
    pub use crate::state::{StepperVisual, SteppingState};
    pub use crate::widgets::{Stepper, StepperOptions, StepperStyle};
}
