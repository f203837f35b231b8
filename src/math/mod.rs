//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// Stepping ranges and polynomial evaluation
pub mod series;
pub use series::frange;
pub use series::horner;
