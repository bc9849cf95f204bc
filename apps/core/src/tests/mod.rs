//! Test Module
//!
//! Cross-module test suite for the Solace backend.
//!
//! ## Test Categories
//! - `engine_tests`: full pipeline scenarios and behavioral properties
//! - `server_tests`: HTTP boundary (routes, body handling, rejections)
//!
//! Unit tests for individual components live beside the code they cover
//! in `#[cfg(test)]` modules.

pub mod server_tests;
