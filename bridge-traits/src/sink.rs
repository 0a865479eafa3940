//! Script Injection Sink
//!
//! The capability through which generated JavaScript reaches the embedded
//! context. Hosting views implement this by handing the source string to
//! their web runtime (e.g. a WebView `loadUrl`/`evaluateJavascript` call).

use crate::error::Result;

/// Executes a JavaScript source string inside the embedded context.
///
/// The dispatcher never inspects the result of execution; a returned error
/// is logged and dropped (the bridge is fire-and-forget by contract).
/// Implementations must expect the `javascript:` envelope produced by the
/// dispatcher and should not re-wrap the source.
pub trait ScriptSink {
    fn execute(&self, source: &str) -> Result<()>;
}
