//! # Host-Side Bridge Adapters
//!
//! Concrete implementations of the `bridge-traits` capabilities for hosts
//! that are not (or not yet) an embedded web view: development hosts, CI
//! stubs and test harnesses.
//!
//! ## Overview
//!
//! - `TracingSink` - logs every statement through `tracing`
//! - `NoopSink` - drops statements silently
//! - `RecordingSink` - captures statements for assertions
//! - `FailingSink` - always errors, for exercising the swallow path
//! - `FnObserver` - closure-backed observer
//! - `RecordingObserver` - captures delivered signals
//!
//! The production `ScriptSink` is the hosting view itself and lives with the
//! host application, not here.

mod observer;
mod sink;

pub use observer::{FnObserver, RecordingObserver};
pub use sink::{FailingSink, NoopSink, RecordingSink, TracingSink};
