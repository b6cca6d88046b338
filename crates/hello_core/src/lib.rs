//! Platform-free primitives for the hello handler.
//!
//! This crate owns the response envelope contract and the pure event-to-response
//! transformation. It intentionally excludes Lambda runtime concerns, which live
//! in `hello_lambda`.

pub mod contract;
