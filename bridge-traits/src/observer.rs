//! Native Observer Capability
//!
//! In-process components can subscribe to the dispatcher and receive the same
//! signals that are forwarded into the embedded JavaScript context. Delivery
//! is synchronous and happens before the corresponding script injection.

use crate::event::{LifecycleSignal, NamedEvent};

/// A signal delivered to native observers.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeSignal {
    /// Fixed pause/resume lifecycle transition.
    Lifecycle(LifecycleSignal),
    /// Application-defined named event.
    Event(NamedEvent),
}

/// Capability interface for native-side subscribers.
///
/// Observers are held as `Arc<dyn BridgeObserver>` and notified in
/// registration order. A slow observer delays both the remaining observers
/// and the script injection, so callbacks should return promptly.
pub trait BridgeObserver {
    fn on_bridge_signal(&self, signal: &BridgeSignal);
}
