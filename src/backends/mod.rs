//! Backends module - Filesystem and external-service integrations
//!
//! Provides:
//! - scan: Note file discovery and reading
//! - gemini: The generateContent API client

pub mod gemini;
pub mod scan;
