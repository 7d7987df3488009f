// File: crates/figure-core/src/types.rs
// Summary: Shared constants (surface size, sample domain, layout scale).

/// Default surface width in pixels.
pub const WIDTH: i32 = 500;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// First sampled domain value.
pub const DOMAIN_START: u32 = 0;
/// Last sampled domain value (inclusive).
pub const DOMAIN_END: u32 = 20;
/// Distance between two sampled domain values.
pub const DOMAIN_STEP: u32 = 2;

/// Pixels per domain unit on the X axis.
pub const X_SCALE: f64 = 20.0;
/// Pixels per output unit on the Y axis.
pub const Y_SCALE: f64 = 40.0;
