//! relic-cli library
//!
//! Exposes the command internals so integration tests can drive a scan
//! without spawning the binary.

pub mod commands;
