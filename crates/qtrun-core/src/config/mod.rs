// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains the UnitSystem measurement preference

/// Measurement unit preference (metric or imperial)
pub mod units;

pub use units::UnitSystem;
