//! Reference Data Store.
//!
//! Holds the lookup tables of one run: employees, leave, holidays, meal
//! exceptions and manual overtime, indexed by employee and date. The
//! store is loaded once and only read afterwards.

mod ingest;
mod reference_data;

pub use reference_data::{HolidayCalendar, ReferenceData, ReferenceTables};
