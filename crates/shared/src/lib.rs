//! Shared types and configuration for Fareflow.
//!
//! This crate provides common types used across all other crates:
//! - Validated rate fractions for commission math
//! - Typed IDs for type-safe entity references
//! - Currency codes carried on bookings
//! - Configuration management for rule sets and expense splits

pub mod config;
pub mod types;

pub use config::AppConfig;
