//! Test utilities and helpers for the Seira project.
//!
//! This crate provides the instrumented doubles used by the seira test suites:
//! - A lifecycle-counting element type for verifying that containers construct
//!   and destroy their elements in matched pairs
//! - A counting global allocator for verifying that heap buffers are acquired
//!   and released in matched pairs across a test binary
//!
//! # Usage
//!
//! This crate is primarily intended for use within the Seira project's test
//! suite and development tools.

pub mod counting_alloc;
pub mod tracked;
