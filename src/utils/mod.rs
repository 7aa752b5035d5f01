//! Utility modules

pub mod amount;
pub mod constants;
pub mod format;
