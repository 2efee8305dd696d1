//! # Configuration Constants
//!
//! Centralized constants for the shape kernel. Tessellation resolution,
//! repair tolerances and prompt size hints are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Welding and degeneracy tolerances
//! - **Resolution**: Fixed tessellation for sphere and cylinder
//! - **Shape Sizes**: Sizes derived from prompt keywords
//! - **Export**: Formats advertised by registered models

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default tolerance for vertex welding.
///
/// Two vertices whose coordinates differ by at most this value on every
/// axis are merged into one.
///
/// # Example
///
/// ```rust
/// use config::constants::WELD_TOLERANCE;
///
/// fn should_weld(a: [f32; 3], b: [f32; 3]) -> bool {
///     a.iter()
///         .zip(b.iter())
///         .all(|(x, y)| ((x - y).abs() as f64) <= WELD_TOLERANCE)
/// }
///
/// assert!(should_weld([0.0, 0.0, 0.0], [0.0, 1e-7, 0.0]));
/// assert!(!should_weld([0.0, 0.0, 0.0], [0.0, 1e-3, 0.0]));
/// ```
pub const WELD_TOLERANCE: f64 = 1e-6;

/// Area below which a triangle counts as degenerate.
///
/// Faces with an area at or below this value are removed by the repairer.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let colinear_area = 0.0;
/// assert!(colinear_area <= DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of latitude bands of the UV sphere.
pub const SPHERE_LAT_SEGMENTS: u32 = 16;

/// Number of longitude slices of the UV sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::{SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS};
///
/// let vertices = (SPHERE_LAT_SEGMENTS + 1) * (SPHERE_LON_SEGMENTS + 1);
/// let faces = 2 * SPHERE_LAT_SEGMENTS * SPHERE_LON_SEGMENTS;
/// assert_eq!(vertices, 561);
/// assert_eq!(faces, 1024);
/// ```
pub const SPHERE_LON_SEGMENTS: u32 = 32;

/// Number of radial segments of the cylinder.
pub const CYLINDER_SEGMENTS: u32 = 16;

/// Minimum number of segments a circular cross-section needs to
/// enclose any area.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// SHAPE SIZE CONSTANTS
// =============================================================================

/// Size used when a prompt carries no size keyword.
pub const DEFAULT_SHAPE_SIZE: f32 = 1.0;

/// Size used for prompts containing `small`, `tiny` or `mini`.
pub const SMALL_SHAPE_SIZE: f32 = 0.5;

/// Size used for prompts containing `large`, `big`, `huge` or `giant`.
pub const LARGE_SHAPE_SIZE: f32 = 2.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// File formats every generator can be exported to by the job layer.
///
/// # Example
///
/// ```rust
/// use config::constants::SUPPORTED_FORMATS;
///
/// assert!(SUPPORTED_FORMATS.contains(&"stl"));
/// ```
pub const SUPPORTED_FORMATS: [&str; 3] = ["stl", "obj", "ply"];

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the numeric tolerances used by the kernel.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance used when welding vertices.
    pub weld_tolerance: f64,
    /// Area at or below which a triangle is degenerate.
    pub degenerate_area_epsilon: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-5, 1.0e-12).expect("valid config");
    /// assert_eq!(cfg.weld_tolerance, 1.0e-5);
    /// assert!(GlobalConfig::new(-1.0, 1.0e-12).is_err());
    /// ```
    pub fn new(weld_tolerance: f64, degenerate_area_epsilon: f64) -> Result<Self, ConfigError> {
        if !weld_tolerance.is_finite() || weld_tolerance < 0.0 {
            return Err(ConfigError::InvalidWeldTolerance(weld_tolerance));
        }
        if !degenerate_area_epsilon.is_finite() || degenerate_area_epsilon < 0.0 {
            return Err(ConfigError::InvalidAreaEpsilon(degenerate_area_epsilon));
        }
        Ok(Self {
            weld_tolerance,
            degenerate_area_epsilon,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: WELD_TOLERANCE,
            degenerate_area_epsilon: DEGENERATE_AREA_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld tolerance is negative or not finite.
    InvalidWeldTolerance(f64),
    /// Raised when the degenerate area epsilon is negative or not finite.
    InvalidAreaEpsilon(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeldTolerance(value) => {
                write!(f, "weld tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidAreaEpsilon(value) => {
                write!(f, "degenerate area epsilon must be finite and non-negative: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
