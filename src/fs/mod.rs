//! Filesystem utilities for coverage-agent.

pub mod atomic;

pub use atomic::atomic_write_file;
