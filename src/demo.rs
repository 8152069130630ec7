//! Scripted stepper session.
//!
//! Drives a [`Stepper`] through taps, holds and typing the way a host event
//! loop would: sleep until the scheduler's next deadline, deliver due firings,
//! repeat. The sleep function is injected so tests can run the same script on a
//! [`ManualClock`](tempo_ui::ManualClock) without waiting.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tempo_ui::{
    Bounds, Clock, DeadlineScheduler, Event, Point, Region, Stepper, StepperLayout, StepperVisual,
};

use crate::config::AppConfig;

/// Frame the demo stepper is laid out in.
pub const DEMO_BOUNDS: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 120.0,
    height: 44.0,
};

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoStep {
    /// Press and release a button after `duration`
    Press { region: Region, duration: Duration },
    /// Press `from`, slide onto `to` after `each`, release after another `each`
    Slide {
        from: Region,
        to: Region,
        each: Duration,
    },
    /// Type into the value field, replacing its contents
    Type(&'static str),
}

/// The script `tempo-demo` runs: a tap, a 3 second hold, a direction change
/// mid-hold, and a typed value with a rejected character.
pub fn default_script() -> Vec<DemoStep> {
    vec![
        DemoStep::Press {
            region: Region::Increase,
            duration: Duration::from_millis(100),
        },
        DemoStep::Press {
            region: Region::Increase,
            duration: Duration::from_secs(3),
        },
        DemoStep::Slide {
            from: Region::Increase,
            to: Region::Decrease,
            each: Duration::from_millis(1000),
        },
        DemoStep::Type("12.5x\n"),
    ]
}

/// What a script run observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoReport {
    /// Every value-changed notification, in order
    pub values: Vec<f64>,
    /// Every button state change, in order
    pub visuals: Vec<StepperVisual>,
    /// Characters the value field refused
    pub rejected: Vec<char>,
    pub final_value: f64,
    pub final_text: String,
}

fn region_point(layout: &StepperLayout, region: Region) -> Point {
    match region {
        Region::Increase => layout.increase.center(),
        Region::Decrease => layout.decrease.center(),
        Region::Outside => layout.value_field.center(),
    }
}

/// Run `script` against a stepper built from `config`.
pub fn run<C, F>(config: &AppConfig, script: &[DemoStep], clock: C, sleep: F) -> DemoReport
where
    C: Clock + Clone,
    F: FnMut(Duration),
{
    let values = Rc::new(RefCell::new(Vec::new()));
    let visuals = Rc::new(RefCell::new(Vec::new()));
    let layout = StepperLayout::arrange(DEMO_BOUNDS, config.style.button_width);

    let value_sink = Rc::clone(&values);
    let visual_sink = Rc::clone(&visuals);
    let mut stepper = Stepper::new(
        config.stepper.to_options(),
        clock.clone(),
        DeadlineScheduler::new(clock.clone()),
    )
    .layout(layout)
    .on_change(move |value| {
        log::info!("value changed: {}", value);
        value_sink.borrow_mut().push(value);
    })
    .on_visual(move |visual| visual_sink.borrow_mut().push(visual));

    let mut driver = Driver {
        stepper: &mut stepper,
        clock,
        sleep,
    };
    let mut rejected = Vec::new();

    for step in script {
        log::debug!("demo step: {:?}", step);
        match step {
            DemoStep::Press { region, duration } => {
                let at = region_point(&layout, *region);
                driver.stepper.on_event(&Event::PointerPressed {
                    position: at,
                    touches: 1,
                });
                driver.hold(*duration);
                driver.stepper.on_event(&Event::PointerReleased { position: at });
            }
            DemoStep::Slide { from, to, each } => {
                let start = region_point(&layout, *from);
                let end = region_point(&layout, *to);
                driver.stepper.on_event(&Event::PointerPressed {
                    position: start,
                    touches: 1,
                });
                driver.hold(*each);
                driver.stepper.on_event(&Event::PointerMoved {
                    position: end,
                    touches: 1,
                });
                driver.hold(*each);
                driver.stepper.on_event(&Event::PointerReleased { position: end });
            }
            DemoStep::Type(text) => {
                if !driver.stepper.begin_editing() {
                    log::warn!("value field is read-only, skipping {:?}", text);
                    continue;
                }
                while driver.stepper.delete_backward() {}
                for ch in text.chars() {
                    let accepted = driver.stepper.insert_text(ch.encode_utf8(&mut [0; 4]));
                    if !accepted && ch != '\n' {
                        log::info!("rejected '{}'", ch);
                        rejected.push(ch);
                    }
                }
                driver.stepper.end_editing();
            }
        }
    }

    let values = values.borrow().clone();
    let visuals = visuals.borrow().clone();
    DemoReport {
        values,
        visuals,
        rejected,
        final_value: stepper.value(),
        final_text: stepper.text().to_string(),
    }
}

/// Plays the host event loop for the demo.
struct Driver<'a, C: Clock, F: FnMut(Duration)> {
    stepper: &'a mut Stepper<C, DeadlineScheduler<C>>,
    clock: C,
    sleep: F,
}

impl<C: Clock, F: FnMut(Duration)> Driver<'_, C, F> {
    /// Keep the pointer down for `duration`, delivering firings as they fall due.
    fn hold(&mut self, duration: Duration) {
        let end = self.clock.now() + duration;
        loop {
            let now = self.clock.now();
            if now >= end {
                break;
            }
            let wake = self
                .stepper
                .next_deadline()
                .map_or(end, |deadline| deadline.min(end));
            (self.sleep)(wake.saturating_duration_since(now));
            self.stepper.poll();
        }
    }
}
