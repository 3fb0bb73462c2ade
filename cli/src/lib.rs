//! Workout Tracker CLI Library
//!
//! The client application: a REST client over the Workout Tracker API
//! with durable session storage. Exposed as a library so the HTTP and
//! session layers can be tested without the binary.

pub mod api;
pub mod session;
pub mod table;
