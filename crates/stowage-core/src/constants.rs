/// Stowage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pressure tier boundaries. A utilization exactly on a boundary belongs
/// to the higher tier.
pub const MEDIUM_PRESSURE_FLOOR: f64 = 0.60;
pub const HIGH_PRESSURE_FLOOR: f64 = 0.80;
pub const CRITICAL_PRESSURE_FLOOR: f64 = 0.90;
pub const EXCEEDED_PRESSURE_FLOOR: f64 = 0.95;

/// Pressure reported when the required set alone cannot fit the capacity.
pub const REQUIRED_OVERFLOW_PRESSURE: f64 = 1.0;
