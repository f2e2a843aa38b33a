//! Foundation types for Rotunda.
//!
//! This crate contains the platform-agnostic types shared by every Rotunda
//! crate: input events, the fixed page set, embedded-content messages,
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod page;
