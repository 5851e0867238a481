//! Quill Core
//!
//! This crate contains the shared plumbing for the Quill crates: logging setup,
//! the math types used for turtle geometry, and optional profiling hooks.

pub mod logging;
pub mod math;
pub mod profiling;
