//! The attendance rule engine.
//!
//! This module contains the per-record rules (day classification, worked
//! hours, tiered overtime, leave and meal allowance resolution), the
//! weekly/monthly aggregator, and the pipeline that drives them over a
//! whole run grouped by department and employee.

mod aggregator;
mod day_classifier;
mod hours;
mod leave_allowance;
mod overtime;
mod pipeline;

pub use aggregator::aggregate;
pub use day_classifier::{GENERAL_OFF_MARKER, classify};
pub use hours::{HoursResult, compute_hours, early_minutes, late_minutes, worked_hours};
pub use leave_allowance::{
    LeaveResolution, absent, forgot_clocking, manual_ot, resolve_leave, resolve_meal,
};
pub use overtime::{calculate_overtime, compute_overtime, quantize};
pub use pipeline::{UNASSIGNED_DEPARTMENT, enrich_record, process_employee, run};
