//! Common types used across the application.

pub mod currency;
pub mod id;
pub mod rate;

pub use currency::Currency;
pub use id::*;
pub use rate::Rate;
