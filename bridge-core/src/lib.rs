//! # Bridge Dispatcher Core
//!
//! The dispatcher mediating between a native host application and the
//! JavaScript context embedded in its web view:
//!
//! - publishes the capability manifest into the embedded global scope once
//!   per page load ([`BridgeDispatcher::initialize`])
//! - forwards lifecycle signals and named events as generated JavaScript
//!   (`<Global>.fireEvent(..)`) while notifying native observers
//! - tracks readiness/version state in [`BridgeState`]
//!
//! ## Overview
//!
//! The hosting component owns one [`BridgeDispatcher`] per view and passes
//! its [`ScriptSink`](bridge_traits::ScriptSink) into every call. Injection
//! is fire-and-forget: no dispatch operation returns an error, sink failures
//! are logged and dropped.
//!
//! ```
//! use bridge_core::{BridgeConfig, BridgeDispatcher};
//! use bridge_traits::error::Result;
//! use bridge_traits::{LifecycleSignal, ScriptSink};
//!
//! struct StdoutSink;
//!
//! impl ScriptSink for StdoutSink {
//!     fn execute(&self, source: &str) -> Result<()> {
//!         println!("{source}");
//!         Ok(())
//!     }
//! }
//!
//! let mut dispatcher = BridgeDispatcher::new(BridgeConfig::default());
//! dispatcher.initialize(&StdoutSink, vec![], vec![]);
//! dispatcher.notify_lifecycle(&StdoutSink, LifecycleSignal::Pause);
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod script;
pub mod state;

pub use config::{BridgeConfig, BridgeConfigBuilder, TriggerToggle};
pub use dispatcher::BridgeDispatcher;
pub use error::{Error, Result};
pub use state::BridgeState;
