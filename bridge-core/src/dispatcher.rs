//! # Bridge Dispatcher
//!
//! The dispatcher is the core of the bridge: it publishes the capability
//! manifest into the embedded JavaScript context, forwards native lifecycle
//! signals and named events as generated `fireEvent` calls, and fans the
//! same signals out to in-process observers.
//!
//! ## Ownership
//!
//! One dispatcher per hosted view, owned by the hosting component and passed
//! by reference to call sites. There is no global instance.
//!
//! ## Threading
//!
//! All calls are expected on the view's owning thread; the dispatcher keeps
//! no internal locks. Mutating operations take `&mut self`, notifications
//! take `&self`.
//!
//! ## Fire-and-forget
//!
//! No dispatch operation returns an error. Sink failures are logged and
//! dropped, a missing payload becomes `{}`, and unsubscribing an unknown
//! observer is a no-op.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use bridge_traits::{
    ActionDescriptor, BridgeObserver, BridgeSignal, EventDescriptor, LifecycleSignal, NamedEvent,
    ScriptSink,
};

use crate::config::BridgeConfig;
use crate::script;
use crate::state::BridgeState;

/// Dispatches native signals into an embedded JavaScript context and to
/// native observers.
pub struct BridgeDispatcher {
    config: BridgeConfig,
    state: BridgeState,
    observers: Vec<Arc<dyn BridgeObserver>>,
}

impl BridgeDispatcher {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            state: BridgeState::new(),
            observers: Vec::new(),
        }
    }

    /// Publish the capability manifest into the embedded context.
    ///
    /// The injected statement installs the bridge global only if no truthy
    /// global of that name exists, then flips the configured UI affordance.
    /// Every call re-executes the injection; only the first call writes the
    /// manifest into [`BridgeState`].
    pub fn initialize(
        &mut self,
        sink: &dyn ScriptSink,
        actions: Vec<ActionDescriptor>,
        events: Vec<EventDescriptor>,
    ) {
        self.state
            .record_initialize(self.config.version(), &actions, &events);

        let mut statement = match script::install_statement(
            self.config.global_object(),
            self.config.version(),
            &actions,
            &events,
        ) {
            Ok(statement) => statement,
            Err(err) => {
                warn!(error = %err, "manifest serialization failed, injection dropped");
                return;
            }
        };
        if let Some(toggle) = self.config.trigger_toggle() {
            statement.push_str(&script::trigger_statement(toggle));
        }

        debug!(
            global = self.config.global_object(),
            actions = actions.len(),
            events = events.len(),
            "initializing bridge global"
        );
        self.run_in_sink(sink, &statement);
    }

    /// Forward a pause/resume signal: observers first, then the embedded
    /// context. Lifecycle signals always carry an empty payload.
    pub fn notify_lifecycle(&self, sink: &dyn ScriptSink, signal: LifecycleSignal) {
        self.notify_observers(&BridgeSignal::Lifecycle(signal));
        let statement =
            script::fire_event_statement(self.config.global_object(), signal.wire_name(), None);
        self.run_in_sink(sink, &statement);
    }

    /// Shorthand for [`notify_lifecycle`](Self::notify_lifecycle) with
    /// [`LifecycleSignal::Pause`].
    pub fn notify_pause(&self, sink: &dyn ScriptSink) {
        self.notify_lifecycle(sink, LifecycleSignal::Pause);
    }

    /// Shorthand for [`notify_lifecycle`](Self::notify_lifecycle) with
    /// [`LifecycleSignal::Resume`].
    pub fn notify_resume(&self, sink: &dyn ScriptSink) {
        self.notify_lifecycle(sink, LifecycleSignal::Resume);
    }

    /// Forward an application-defined event: observers first, then the
    /// embedded context.
    pub fn notify_event(&self, sink: &dyn ScriptSink, event: &NamedEvent) {
        self.notify_observers(&BridgeSignal::Event(event.clone()));
        let statement = script::fire_event_statement(
            self.config.global_object(),
            event.name().as_str(),
            event.payload(),
        );
        self.run_in_sink(sink, &statement);
    }

    /// Register an observer. Duplicate registrations are kept and yield
    /// duplicate notifications.
    pub fn subscribe(&mut self, observer: Arc<dyn BridgeObserver>) {
        self.observers.push(observer);
    }

    /// Remove the first registration matching `observer` by identity.
    /// No-op if it is not registered.
    pub fn unsubscribe(&mut self, observer: &Arc<dyn BridgeObserver>) {
        if let Some(position) = self
            .observers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, observer))
        {
            self.observers.remove(position);
        }
    }

    /// Submit a statement through the canonical injection envelope.
    ///
    /// Execution failures are logged and dropped.
    pub fn run_in_sink(&self, sink: &dyn ScriptSink, statement: &str) {
        let source = script::envelope(statement);
        trace!(source = source.as_str(), "executing in sink");
        if let Err(err) = sink.execute(&source) {
            warn!(error = %err, "script injection dropped");
        }
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&self, signal: &BridgeSignal) {
        trace!(observers = self.observers.len(), ?signal, "notifying observers");
        for observer in &self.observers {
            observer.on_bridge_signal(signal);
        }
    }
}

impl Default for BridgeDispatcher {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}
