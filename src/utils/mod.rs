//! Utility modules for blindbot

pub mod visualization;

pub use visualization::{colors, PathStyle, PointStyle, Visualizer};
