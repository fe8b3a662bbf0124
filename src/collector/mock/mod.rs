//! Mock host provider for testing collectors without a live host.
//!
//! This module provides `MockProvider` and pre-built scenarios so tests
//! can simulate denied mounts, bare hosts, and multi-homed interfaces
//! deterministically on any platform.

mod provider;
mod scenarios;

pub use provider::MockProvider;
