// ABOUTME: Formula-based training algorithms from published sports science
// ABOUTME: Max HR estimation and TRIMP training load

//! Algorithm Selection Module
//!
//! Max HR estimation is an enum over published formulas so callers pick one by
//! name from configuration. TRIMP exposes one function per model.

pub mod maxhr;
pub mod trimp;

pub use maxhr::{calculate_max_heart_rate, MaxHrFormula};
pub use trimp::{calculate_edwards_trimp, calculate_trimp};
