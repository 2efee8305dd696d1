//! # Config Crate
//!
//! Centralized configuration constants for the shape kernel.
//! Tessellation resolution, numeric tolerances and prompt size hints are
//! defined here so the mesh kernel and the model registry agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEGENERATE_AREA_EPSILON, WELD_TOLERANCE};
//!
//! // Two coordinates closer than WELD_TOLERANCE are the same vertex
//! let a: f32 = 1.0;
//! let b: f32 = 1.0 + 1e-7;
//! assert!(((a - b).abs() as f64) <= WELD_TOLERANCE);
//!
//! // Triangles at or below DEGENERATE_AREA_EPSILON are dropped by repair
//! assert!(DEGENERATE_AREA_EPSILON < WELD_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from any crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
