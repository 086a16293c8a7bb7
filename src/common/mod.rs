//! Common types, traits, and error definitions for drone_log_tools
//!
//! This module provides the building blocks shared by the plotters
//! and the fixed-time publisher.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
