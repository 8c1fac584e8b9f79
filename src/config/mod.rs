//! Configuration loading and management for the Attendance Rule Engine.
//!
//! This module loads the shift rule table and the fixed reference
//! thresholds from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} shift rules", loader.config().shifts().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, RuleThresholds, ShiftClass, ShiftRule, ShiftsConfig, normalize_shift_code,
};
