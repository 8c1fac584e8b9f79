//! Attendance Rule Engine
//!
//! This crate turns raw daily clock-in/clock-out punches into payroll-grade
//! attendance reports: per-day classification (work, rest, off, overtime,
//! public holiday, festival), net worked hours, tiered overtime, leave and
//! meal allowance reconciliation, and weekly/monthly roll-ups per employee,
//! grouped by department with a company-wide master table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
