//! Common test utilities for CLI integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus fake tools
//! - `TestResult`: captured exit code and output of one run

#![allow(dead_code)]

pub mod env;

pub use env::*;
