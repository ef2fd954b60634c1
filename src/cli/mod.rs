//! CLI infrastructure for the `ttt` analysis tool
//!
//! The binary is a thin caller of the library: it parses boards, runs the
//! solver, and prints what it found.

pub mod commands;
pub mod config;
pub mod output;
