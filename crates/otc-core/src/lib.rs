//! # otc-core
//!
//! Core types, sentinels, and error types for the OTC timeline.
//!
//! This crate provides the foundational types shared across all OTC crates:
//! - Raw payload shapes returned by the work-order API (tasks, status history)
//! - Derived per-task types (`ResolvedStatus`, `Record`)
//! - The closed set of recognized status categories
//! - Sentinel strings used when task metadata is missing
//! - Fixed display offsets and timestamp normalization
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod sentinel;
pub mod serde_helpers;
pub mod time;
