//! # HAL Sample Catalog
//!
//! A small bookstore built on the `hal-relations` engine, exposed as a
//! library for integration testing.

pub mod catalog;
pub mod model;
pub mod telemetry;
