//! Protobuf message types for the Redpanda control-plane and data-plane APIs.
//!
//! Generated from `proto/` by `build.rs` when the `regenerate-proto` feature
//! is enabled; committed so ordinary builds need no `protoc`.

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod controlplane;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod dataplane;
