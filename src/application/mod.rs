//! Application layer orchestrating transform requests.
//!
//! This module defines the `TransformEngine`, the single entry point shared by
//! the HTTP server and the CLI. It turns a raw request (operation tag,
//! parameters, optional shape) into a transformed shape.

pub mod engine;
