//! Lambda runtime adapter for the hello handler.
//!
//! The envelope contract and transformation live in `hello_core`; this crate
//! only binds them to `lambda_runtime` events and logging.

pub mod handlers;
