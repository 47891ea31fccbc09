//! Flows module - Multi-step operations over the backends
//!
//! Provides:
//! - review: The scan -> filter -> summarize -> write pipeline, plus the
//!   list-only scan command

pub mod review;
