//! Script sinks usable on hosts without an embedded web view.
//!
//! The production sink is the hosting view itself; these implementations
//! cover development, CI and test hosts.

use std::sync::Mutex;

use tracing::debug;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::ScriptSink;

/// Logs every executed statement through `tracing` and discards it.
///
/// Useful while developing host code before a real view is wired up.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl ScriptSink for TracingSink {
    fn execute(&self, source: &str) -> Result<()> {
        debug!(source, "script sink execute");
        Ok(())
    }
}

/// Silently drops every statement. CI stub.
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

impl ScriptSink for NoopSink {
    fn execute(&self, _source: &str) -> Result<()> {
        Ok(())
    }
}

/// Records every executed statement for later inspection.
///
/// Test double: lets assertions run against exactly what would have reached
/// the embedded context, envelope included.
#[derive(Debug, Default)]
pub struct RecordingSink {
    executed: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All statements executed so far, in submission order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().expect("sink poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.executed.lock().expect("sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScriptSink for RecordingSink {
    fn execute(&self, source: &str) -> Result<()> {
        self.executed
            .lock()
            .expect("sink poisoned")
            .push(source.to_string());
        Ok(())
    }
}

/// Always fails. Exercises the dispatcher's fire-and-forget swallow path.
#[derive(Debug, Clone, Default)]
pub struct FailingSink;

impl ScriptSink for FailingSink {
    fn execute(&self, _source: &str) -> Result<()> {
        Err(BridgeError::Execution("sink configured to fail".to_string()))
    }
}
