//! Common types, traits, and error definitions for blindbot
//!
//! This module provides the foundational building blocks used across
//! the geometry and model layers of this crate.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
