//! Common utilities for the wombat rendering engine.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Warning System** - colored terminal output for bad but recoverable input

pub mod warning;
