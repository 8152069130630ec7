//! tempo - Configuration, logging and a scripted demo around `tempo_ui`'s stepper
//!
//! The stepper engine itself lives in the `tempo_ui` crate. This crate adds the
//! persisted JSON configuration, logger setup, and the `tempo-demo` binary that
//! replays a scripted session against the engine.

pub mod config;
pub mod demo;
pub mod logging;

pub use config::{AppConfig, ConfigError, LogLevel, StepperSettings};
pub use demo::{DemoReport, DemoStep};
