//! Core commission and revenue logic for Fareflow.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every operation is a stateless transform from input collections to freshly
//! constructed outputs; callers own fetching, persistence, and display.
//!
//! # Modules
//!
//! - `booking` - The booking input contract and agent attribution
//! - `commission` - Rule sets and per-booking commission calculation
//! - `revenue` - Portfolio and per-agent revenue aggregation
//! - `pnl` - Simplified profit & loss statements

pub mod booking;
pub mod commission;
pub mod pnl;
pub mod revenue;
