//! Observer adapters for host components.

use std::sync::Mutex;

use bridge_traits::{BridgeObserver, BridgeSignal};

/// Adapts a closure into a [`BridgeObserver`].
///
/// ```
/// use bridge_host::FnObserver;
/// use bridge_traits::BridgeSignal;
///
/// let observer = FnObserver::new(|signal: &BridgeSignal| {
///     println!("bridge signal: {signal:?}");
/// });
/// ```
pub struct FnObserver<F>
where
    F: Fn(&BridgeSignal),
{
    callback: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&BridgeSignal),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> BridgeObserver for FnObserver<F>
where
    F: Fn(&BridgeSignal),
{
    fn on_bridge_signal(&self, signal: &BridgeSignal) {
        (self.callback)(signal);
    }
}

/// Records every received signal for later inspection. Test double.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    signals: Mutex<Vec<BridgeSignal>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals received so far, in delivery order.
    pub fn signals(&self) -> Vec<BridgeSignal> {
        self.signals.lock().expect("observer poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.signals.lock().expect("observer poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BridgeObserver for RecordingObserver {
    fn on_bridge_signal(&self, signal: &BridgeSignal) {
        self.signals
            .lock()
            .expect("observer poisoned")
            .push(signal.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{EventName, EventPayload, LifecycleSignal, NamedEvent};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fn_observer_invokes_callback() {
        let calls = AtomicUsize::new(0);
        let observer = FnObserver::new(|_signal: &BridgeSignal| {
            calls.fetch_add(1, Ordering::SeqCst);
        });

        observer.on_bridge_signal(&BridgeSignal::Lifecycle(LifecycleSignal::Pause));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_recording_observer_captures_event_payload() {
        let observer = RecordingObserver::new();
        let event = NamedEvent::with_payload(
            EventName::new("download_progress").unwrap(),
            EventPayload::from_value(json!({"percent": 42})),
        );

        observer.on_bridge_signal(&BridgeSignal::Event(event.clone()));

        assert_eq!(observer.signals(), [BridgeSignal::Event(event)]);
        match &observer.signals()[0] {
            BridgeSignal::Event(received) => {
                assert_eq!(
                    received.payload().map(EventPayload::to_literal),
                    Some(r#"{"percent":42}"#.to_string())
                );
            }
            other => panic!("unexpected signal: {other:?}"),
        }
    }

    #[test]
    fn test_recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.on_bridge_signal(&BridgeSignal::Lifecycle(LifecycleSignal::Pause));
        observer.on_bridge_signal(&BridgeSignal::Lifecycle(LifecycleSignal::Resume));

        assert_eq!(
            observer.signals(),
            [
                BridgeSignal::Lifecycle(LifecycleSignal::Pause),
                BridgeSignal::Lifecycle(LifecycleSignal::Resume),
            ]
        );
    }
}
