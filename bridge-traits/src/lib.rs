//! # Bridge Contract Traits
//!
//! Contract between the bridge dispatcher core and its collaborators: the
//! hosting view that executes injected JavaScript, the provider of the
//! capability manifest, and native components observing bridge traffic.
//!
//! ## Overview
//!
//! The dispatcher in `bridge-core` is generic over two capabilities defined
//! here:
//!
//! - [`ScriptSink`](sink::ScriptSink) - executes a JavaScript source string
//!   inside the embedded context (implemented by the hosting view)
//! - [`BridgeObserver`](observer::BridgeObserver) - receives native-side
//!   notification of every forwarded signal
//!
//! Alongside the capabilities live the data types that cross the boundary:
//! validated event wire names, opaque structured payloads, lifecycle
//! signals, and the manifest descriptors embedded into the injected global.
//!
//! ## Threading
//!
//! The bridge is single-context by design: all calls are expected to arrive
//! on the hosting view's owning thread, so no trait here requires
//! `Send + Sync`. Implementations that happen to be thread-safe may be used
//! from hosts with their own synchronization.
//!
//! ## Error Handling
//!
//! Fallible boundary constructors and sink execution use
//! [`BridgeError`](error::BridgeError). Dispatch operations themselves never
//! surface errors; see `bridge-core` for the fire-and-forget contract.

pub mod error;
pub mod event;
pub mod manifest;
pub mod observer;
pub mod sink;

pub use error::BridgeError;

// Re-export commonly used types
pub use event::{is_js_identifier, EventName, EventPayload, LifecycleSignal, NamedEvent};
pub use manifest::{ActionDescriptor, EventDescriptor};
pub use observer::{BridgeObserver, BridgeSignal};
pub use sink::ScriptSink;
