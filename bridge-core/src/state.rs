//! Bridge readiness and manifest state.
//!
//! One `BridgeState` lives inside each dispatcher for the lifetime of the
//! hosted view. It records what the first `initialize` call published into
//! the embedded context; later calls re-run the injection but never rewrite
//! the recorded manifest (first writer wins).

use bridge_traits::{ActionDescriptor, EventDescriptor};

/// Readiness, version and capability-manifest data for one bridge instance.
#[derive(Debug, Clone, Default)]
pub struct BridgeState {
    is_ready: bool,
    version: String,
    actions: Vec<ActionDescriptor>,
    events: Vec<EventDescriptor>,
    initialized: bool,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the injected global advertises readiness.
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// Version string recorded by the first `initialize` call.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Action manifest recorded by the first `initialize` call, in order.
    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    /// Event manifest recorded by the first `initialize` call, in order.
    pub fn events(&self) -> &[EventDescriptor] {
        &self.events
    }

    /// True once `initialize` has completed at least once. Never reverts.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Record an `initialize` call. Only the first call writes the manifest
    /// fields; every call leaves `initialized` set.
    pub(crate) fn record_initialize(
        &mut self,
        version: &str,
        actions: &[ActionDescriptor],
        events: &[EventDescriptor],
    ) {
        if !self.initialized {
            self.version = version.to_string();
            self.actions = actions.to_vec();
            self.events = events.to_vec();
            self.is_ready = true;
        }
        self.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_writer_wins() {
        let mut state = BridgeState::new();
        assert!(!state.initialized());
        assert!(!state.is_ready());

        let first = vec![ActionDescriptor::from_value(json!({"name": "one"}))];
        state.record_initialize("1.0.0", &first, &[]);
        assert!(state.initialized());
        assert!(state.is_ready());
        assert_eq!(state.version(), "1.0.0");
        assert_eq!(state.actions(), first.as_slice());

        let second = vec![ActionDescriptor::from_value(json!({"name": "two"}))];
        state.record_initialize("9.9.9", &second, &[]);
        assert!(state.initialized());
        assert_eq!(state.version(), "1.0.0");
        assert_eq!(state.actions(), first.as_slice());
    }
}
