//! Workspace facade crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `bridge-core`, `bridge-host`). Host applications
//! can depend on `webridge-workspace` and enable the documented features
//! without needing to wire each crate individually.

pub use bridge_core;
pub use bridge_traits;

#[cfg(feature = "host-shims")]
pub use bridge_host;
