//! Property-based tests for the build and compatibility core

mod determinism;
