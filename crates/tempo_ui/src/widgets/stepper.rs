//! Stepper with tap and press-and-hold auto-stepping
//!
//! A press on the increase or decrease button either counts as a tap (released
//! before `auto_step_after_interval`) or starts a chain of auto-steps: slow
//! every `default_auto_stepping_interval`, then fast every
//! `fast_auto_stepping_interval` once the press has lasted
//! `fast_auto_step_after_interval`. Sliding the pointer between buttons changes
//! direction mid-hold; sliding off both pauses stepping without ending the hold.
//!
//! The value field accepts typed numbers when `should_tap_to_change` is set and
//! commits on return or focus loss.

use std::time::Duration;
use web_time::Instant;

use crate::callback::Callback;
use crate::clock::{Clock, SystemClock};
use crate::constants::{
    AUTO_STEP_AFTER_INTERVAL, DEFAULT_AUTO_STEPPING_INTERVAL, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_VALUE, DEFAULT_STEP_VALUE, DEFAULT_VALUE, FAST_AUTO_STEPPING_INTERVAL,
    FAST_AUTO_STEP_AFTER_INTERVAL,
};
use crate::event::Event;
use crate::layout::{Point, Region, StepperLayout};
use crate::scheduler::{DeadlineScheduler, Scheduler, TimerToken};
use crate::state::{StepperValue, StepperVisual, SteppingState, TextEntryState};
use crate::text_core::parse_commit_or_zero;

/// Behavior options for a [`Stepper`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepperOptions {
    /// Initial value
    pub value: f64,
    /// Inclusive lower bound
    pub min_value: f64,
    /// Inclusive upper bound
    pub max_value: f64,
    /// Amount added or subtracted per step
    pub step_value: f64,
    /// Slow auto-step cadence
    pub default_auto_stepping_interval: Duration,
    /// Fast auto-step cadence
    pub fast_auto_stepping_interval: Duration,
    /// Hold time before auto-stepping starts; shorter presses are taps
    pub auto_step_after_interval: Duration,
    /// Hold time after which the fast cadence is used
    pub fast_auto_step_after_interval: Duration,
    /// Allow typing a value into the value field
    pub should_tap_to_change: bool,
    /// Allow press-and-hold auto-stepping
    pub should_auto_step: bool,
    /// Show the value truncated to an integer
    pub show_int_value: bool,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            step_value: DEFAULT_STEP_VALUE,
            default_auto_stepping_interval: DEFAULT_AUTO_STEPPING_INTERVAL,
            fast_auto_stepping_interval: FAST_AUTO_STEPPING_INTERVAL,
            auto_step_after_interval: AUTO_STEP_AFTER_INTERVAL,
            fast_auto_step_after_interval: FAST_AUTO_STEP_AFTER_INTERVAL,
            should_tap_to_change: true,
            should_auto_step: true,
            show_int_value: true,
        }
    }
}

impl StepperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the range (min and max)
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the step size
    pub fn step(mut self, step: f64) -> Self {
        self.step_value = step;
        self
    }

    /// Set the slow and fast auto-step cadences
    pub fn intervals(mut self, default: Duration, fast: Duration) -> Self {
        self.default_auto_stepping_interval = default;
        self.fast_auto_stepping_interval = fast;
        self
    }

    /// Set when auto-stepping starts and when it speeds up
    pub fn thresholds(mut self, auto_step_after: Duration, fast_after: Duration) -> Self {
        self.auto_step_after_interval = auto_step_after;
        self.fast_auto_step_after_interval = fast_after;
        self
    }

    pub fn tap_to_change(mut self, enabled: bool) -> Self {
        self.should_tap_to_change = enabled;
        self
    }

    pub fn auto_step(mut self, enabled: bool) -> Self {
        self.should_auto_step = enabled;
        self
    }

    pub fn show_int_value(mut self, enabled: bool) -> Self {
        self.show_int_value = enabled;
        self
    }

    pub(crate) fn timing(&self) -> AutoStepTiming {
        AutoStepTiming {
            default_interval: self.default_auto_stepping_interval,
            fast_interval: self.fast_auto_stepping_interval,
            auto_step_after: self.auto_step_after_interval,
            fast_after: self.fast_auto_step_after_interval,
        }
    }
}

/// The timing half of [`StepperOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStepTiming {
    pub default_interval: Duration,
    pub fast_interval: Duration,
    pub auto_step_after: Duration,
    pub fast_after: Duration,
}

impl AutoStepTiming {
    /// Gap until the next firing, for a firing `held` into the press.
    ///
    /// A firing landing exactly on `fast_after` already uses the fast cadence.
    pub fn interval_after(&self, held: Duration) -> Duration {
        if held >= self.fast_after {
            self.fast_interval
        } else {
            self.default_interval
        }
    }

    /// Whether a press released after `held` counts as a tap.
    pub fn is_tap(&self, held: Duration) -> bool {
        held < self.auto_step_after
    }
}

/// One tracked pointer contact, from press to release or cancel.
#[derive(Debug, Clone, Copy)]
struct Session {
    started_at: Instant,
    pending: Option<TimerToken>,
    /// Whether at least one auto-step firing was delivered
    fired: bool,
}

/// A bounded numeric value driven by taps, holds and typed input.
///
/// Runs on a single thread: the host delivers pointer and text events through
/// [`on_event`](Self::on_event) and hands scheduled firings back through
/// [`on_timer`](Self::on_timer) (or [`poll`](Self::poll) when the stepper owns a
/// [`DeadlineScheduler`]). Dropping the stepper cancels any pending firing.
pub struct Stepper<C: Clock = SystemClock, S: Scheduler = DeadlineScheduler<SystemClock>> {
    value: StepperValue,
    timing: AutoStepTiming,
    should_tap_to_change: bool,
    should_auto_step: bool,
    show_int_value: bool,
    state: SteppingState,
    visual: StepperVisual,
    session: Option<Session>,
    generation: u64,
    layout: StepperLayout,
    entry: TextEntryState,
    clock: C,
    scheduler: S,
    on_change: Callback<f64>,
    on_visual: Callback<StepperVisual>,
}

impl Stepper<SystemClock, DeadlineScheduler<SystemClock>> {
    /// Stepper on the platform clock with its own polled scheduler.
    pub fn with_system_clock(options: StepperOptions) -> Self {
        Self::new(options, SystemClock, DeadlineScheduler::new(SystemClock))
    }
}

impl<C: Clock, S: Scheduler> Stepper<C, S> {
    pub fn new(options: StepperOptions, clock: C, scheduler: S) -> Self {
        let value = StepperValue::new(
            options.value,
            options.min_value,
            options.max_value,
            options.step_value,
        );
        Self {
            entry: TextEntryState::new(value.value(), options.show_int_value),
            value,
            timing: options.timing(),
            should_tap_to_change: options.should_tap_to_change,
            should_auto_step: options.should_auto_step,
            show_int_value: options.show_int_value,
            state: SteppingState::Normal,
            visual: StepperVisual::default(),
            session: None,
            generation: 0,
            layout: StepperLayout::default(),
            clock,
            scheduler,
            on_change: Callback::none(),
            on_visual: Callback::none(),
        }
    }

    /// Set the button frames used for hit-testing
    pub fn layout(mut self, layout: StepperLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the value-changed handler
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        self.on_change = Callback::new(callback);
        self
    }

    /// Set the handler for button state changes
    pub fn on_visual<F>(mut self, callback: F) -> Self
    where
        F: FnMut(StepperVisual) + 'static,
    {
        self.on_visual = Callback::new(callback);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn value(&self) -> f64 {
        self.value.value()
    }

    pub fn min_value(&self) -> f64 {
        self.value.min_value()
    }

    pub fn max_value(&self) -> f64 {
        self.value.max_value()
    }

    pub fn step_value(&self) -> f64 {
        self.value.step_value()
    }

    pub fn state(&self) -> SteppingState {
        self.state
    }

    pub fn visual(&self) -> StepperVisual {
        self.visual
    }

    /// Text shown in the value field (the edit buffer while editing)
    pub fn text(&self) -> &str {
        &self.entry.text
    }

    pub fn is_editing(&self) -> bool {
        self.entry.is_editing
    }

    /// Whether a pointer is currently tracked
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    pub fn timing(&self) -> AutoStepTiming {
        self.timing
    }

    pub fn current_layout(&self) -> StepperLayout {
        self.layout
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // -------------------------------------------------------------------------
    // Programmatic changes
    // -------------------------------------------------------------------------

    /// Set the value (clamped) and notify.
    pub fn set_value(&mut self, value: f64) {
        let stored = self.value.set(value);
        self.value_committed(stored);
    }

    /// Replace the bounds. Notifies only if the current value had to move.
    pub fn set_range(&mut self, min_value: f64, max_value: f64) {
        if self.value.set_range(min_value, max_value) {
            self.value_committed(self.value.value());
        }
    }

    pub fn set_step(&mut self, step_value: f64) {
        self.value.set_step(step_value);
    }

    pub fn set_layout(&mut self, layout: StepperLayout) {
        self.layout = layout;
    }

    pub fn set_show_int_value(&mut self, show_int_value: bool) {
        self.show_int_value = show_int_value;
        if !self.entry.is_editing {
            self.entry.refresh(self.value.value(), show_int_value);
        }
    }

    pub fn set_tap_to_change(&mut self, enabled: bool) {
        self.should_tap_to_change = enabled;
    }

    /// Turning auto-stepping off ends any hold in progress.
    pub fn set_auto_step(&mut self, enabled: bool) {
        self.should_auto_step = enabled;
        if !enabled {
            self.invalidate();
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Dispatch an input event.
    pub fn on_event(&mut self, event: &Event) {
        match event {
            Event::PointerPressed { position, touches } => self.pointer_pressed(*position, *touches),
            Event::PointerMoved { position, touches } => self.pointer_moved(*position, *touches),
            Event::PointerReleased { .. } => self.pointer_released(),
            Event::PointerCanceled => self.invalidate(),
            Event::BeginEditing => {
                self.begin_editing();
            }
            Event::TextInserted { text } => {
                self.insert_text(text);
            }
            Event::DeleteBackward => {
                self.delete_backward();
            }
            Event::FocusLost => self.end_editing(),
        }
    }

    /// Start tracking a press. More than one contact cancels instead.
    pub fn pointer_pressed(&mut self, position: Point, touches: usize) {
        if touches != 1 {
            log::debug!("Stepper: {} touches on press, canceling", touches);
            self.invalidate();
            return;
        }

        // A press without a release in between replaces the old session
        if self.session.is_some() {
            self.end_session();
        }

        match self.layout.region_at(position) {
            Region::Increase => self.set_state(SteppingState::Increasing),
            Region::Decrease => self.set_state(SteppingState::Decreasing),
            Region::Outside => {}
        }

        let started_at = self.clock.now();
        let pending = if self.should_auto_step {
            Some(self.schedule(self.timing.auto_step_after))
        } else {
            None
        };
        self.session = Some(Session {
            started_at,
            pending,
            fired: false,
        });
        log::debug!("Stepper: pressed at {:?}, state = {:?}", position, self.state);
    }

    /// Re-classify the tracked pointer. More than one contact cancels instead.
    pub fn pointer_moved(&mut self, position: Point, touches: usize) {
        if touches != 1 {
            log::debug!("Stepper: {} touches on move, canceling", touches);
            self.invalidate();
            return;
        }
        if self.session.is_none() {
            return;
        }

        let state = match self.layout.region_at(position) {
            Region::Increase => SteppingState::Increasing,
            Region::Decrease => SteppingState::Decreasing,
            Region::Outside => SteppingState::Normal,
        };
        self.set_state(state);
    }

    /// End the press. A press shorter than the auto-step delay steps once.
    ///
    /// So does a longer press whose first firing was never delivered (the host
    /// released before polling): a hold only skips the release step because its
    /// firings already stepped.
    pub fn pointer_released(&mut self) {
        let Some(session) = self.session else {
            self.end_session();
            return;
        };

        let held = self.clock.now().saturating_duration_since(session.started_at);
        if !self.should_auto_step || self.timing.is_tap(held) || !session.fired {
            if let Some(value) = self.value.apply_step(self.state) {
                log::debug!("Stepper: tap after {:?}, value = {}", held, value);
                self.value_committed(value);
            }
        } else {
            log::debug!("Stepper: hold released after {:?}", held);
        }

        self.end_session();
    }

    /// Cancel the current press, if any. Safe to call repeatedly.
    pub fn invalidate(&mut self) {
        if self.session.is_some() {
            log::debug!("Stepper: session invalidated");
        }
        self.end_session();
    }

    /// Deliver a scheduled firing. Firings from an ended session are dropped.
    pub fn on_timer(&mut self, token: TimerToken) {
        let Some(session) = self.session else {
            log::trace!("Stepper: dropped {:?}, no session", token);
            return;
        };
        if session.pending != Some(token) {
            log::trace!("Stepper: dropped stale {:?}", token);
            return;
        }

        let held = self.clock.now().saturating_duration_since(session.started_at);
        let interval = self.timing.interval_after(held);
        let next = self.schedule(interval);
        self.session = Some(Session {
            pending: Some(next),
            fired: true,
            ..session
        });

        if let Some(value) = self.value.apply_step(self.state) {
            log::trace!("Stepper: auto-step at {:?}, next in {:?}, value = {}", held, interval, value);
            self.value_committed(value);
        }
    }

    // -------------------------------------------------------------------------
    // Text entry
    // -------------------------------------------------------------------------

    /// Enter edit mode. Refused when typing is disabled.
    pub fn begin_editing(&mut self) -> bool {
        if !self.should_tap_to_change {
            log::debug!("Stepper: editing disabled");
            return false;
        }
        self.entry.is_editing = true;
        true
    }

    /// Offer typed text. Returns whether it was inserted.
    ///
    /// `"\n"` is never inserted: it commits the buffer and leaves edit mode.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !self.entry.is_editing {
            return false;
        }
        if text == "\n" {
            self.commit_text();
            return false;
        }
        self.entry.try_insert(text)
    }

    /// Backspace in the value field.
    pub fn delete_backward(&mut self) -> bool {
        self.entry.is_editing && self.entry.delete_backward()
    }

    /// Focus left the value field: commit whatever is typed.
    pub fn end_editing(&mut self) {
        if self.entry.is_editing {
            self.commit_text();
        }
    }

    /// Leave edit mode without committing and restore the displayed value.
    pub fn cancel_editing(&mut self) {
        if self.entry.is_editing {
            self.entry.is_editing = false;
            self.entry.refresh(self.value.value(), self.show_int_value);
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn commit_text(&mut self) {
        self.entry.is_editing = false;
        let parsed = parse_commit_or_zero(&self.entry.text);
        let stored = self.value.set(parsed);
        log::debug!("Stepper: committed '{}', value = {}", self.entry.text, stored);
        self.value_committed(stored);
    }

    fn value_committed(&mut self, value: f64) {
        self.entry.refresh(value, self.show_int_value);
        self.on_change.emit(value);
    }

    fn set_state(&mut self, state: SteppingState) {
        self.state = state;
        let visual = StepperVisual::for_state(state);
        if visual != self.visual {
            self.visual = visual;
            self.on_visual.emit(visual);
        }
    }

    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.generation += 1;
        let token = TimerToken::new(self.generation);
        self.scheduler.schedule_once(delay, token);
        token
    }

    fn release_timer(&mut self) {
        if let Some(token) = self.session.take().and_then(|s| s.pending) {
            self.scheduler.cancel(token);
        }
    }

    fn end_session(&mut self) {
        self.release_timer();
        self.set_state(SteppingState::Normal);
    }
}

impl<C: Clock, SC: Clock> Stepper<C, DeadlineScheduler<SC>> {
    /// Deliver every due firing. Returns how many were delivered.
    ///
    /// Firings scheduled while delivering wait for the next call.
    pub fn poll(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let count = due.len();
        for token in due {
            self.on_timer(token);
        }
        count
    }

    /// When the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }
}

impl<C: Clock, S: Scheduler> Drop for Stepper<C, S> {
    fn drop(&mut self) {
        self.release_timer();
    }
}
