//! Configuration types for attendance rule evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The roster class a shift belongs to.
///
/// The class drives Saturday classification, the general-holiday `OFF`
/// override and overtime eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftClass {
    /// Six-day roster, overtime eligible. Saturday is an overtime workday.
    GeneralStaff,
    /// Five-day roster with a fixed Saturday rest and no overtime.
    FixedRoster,
}

/// Scheduling rule for one shift code.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{ShiftClass, ShiftRule};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let rule = ShiftRule {
///     class: ShiftClass::GeneralStaff,
///     start: NaiveTime::from_hms_opt(7, 40, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(18, 40, 0).unwrap(),
///     break_hours: Decimal::new(183, 2),
///     friday_end: Some(NaiveTime::from_hms_opt(19, 40, 0).unwrap()),
/// };
/// assert!(rule.has_extended_friday());
/// assert!(rule.is_overtime_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRule {
    /// The roster class of this shift.
    pub class: ShiftClass,
    /// Scheduled start of the working day.
    pub start: NaiveTime,
    /// Scheduled end of the working day.
    pub end: NaiveTime,
    /// Total unpaid break hours deducted from every worked day.
    pub break_hours: Decimal,
    /// Friday end time, when the roster defines one.
    #[serde(default)]
    pub friday_end: Option<NaiveTime>,
}

impl ShiftRule {
    /// Returns true when Fridays end later than the regular scheduled end.
    pub fn has_extended_friday(&self) -> bool {
        self.friday_end.is_some_and(|friday_end| friday_end != self.end)
    }

    /// Returns true when the shift earns overtime.
    pub fn is_overtime_eligible(&self) -> bool {
        self.class == ShiftClass::GeneralStaff
    }
}

/// Shift table file structure (`shifts.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// Map of shift code to shift rule.
    pub shifts: HashMap<String, ShiftRule>,
}

/// Fixed reference thresholds (`rules.yaml`).
///
/// The late/early references are independent of any shift's own schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Clock-ins after this time count as late.
    pub reference_start: NaiveTime,
    /// Clock-outs before this time count as early.
    pub reference_end: NaiveTime,
    /// Hours of a normal workday before overtime accrues.
    pub standard_day_hours: Decimal,
    /// Meal allowance units granted for a qualifying day.
    pub meal_units: u32,
    /// Public holiday overtime units paid at 2.0x before the 3.0x tier.
    pub holiday_double_cap: Decimal,
    /// Extra unpaid hours on an extended Friday.
    pub friday_extra_unpaid_hours: Decimal,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            reference_start: clock(8, 0),
            reference_end: clock(18, 0),
            standard_day_hours: Decimal::new(9, 0),
            meal_units: 3,
            holiday_double_cap: Decimal::new(8, 0),
            friday_extra_unpaid_hours: Decimal::ONE,
        }
    }
}

/// The complete engine configuration.
///
/// Shift codes are stored trimmed and upper-cased so lookups tolerate
/// stray whitespace and lower-case codes in the employee table.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    shifts: HashMap<String, ShiftRule>,
    rules: RuleThresholds,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(shifts: HashMap<String, ShiftRule>, rules: RuleThresholds) -> Self {
        let shifts = shifts
            .into_iter()
            .map(|(code, rule)| (normalize_shift_code(&code), rule))
            .collect();
        Self { shifts, rules }
    }

    /// The stock configuration shipped in `config/default`.
    ///
    /// ```
    /// use attendance_engine::config::{EngineConfig, ShiftClass};
    ///
    /// let config = EngineConfig::standard();
    /// assert_eq!(config.shift("a2").unwrap().class, ShiftClass::GeneralStaff);
    /// assert_eq!(config.shift("B1").unwrap().class, ShiftClass::FixedRoster);
    /// ```
    pub fn standard() -> Self {
        let general_break = Decimal::new(83, 2) + Decimal::new(67, 2) + Decimal::new(33, 2);

        let mut shifts = HashMap::new();
        shifts.insert(
            "A1".to_string(),
            ShiftRule {
                class: ShiftClass::GeneralStaff,
                start: clock(7, 40),
                end: clock(18, 40),
                break_hours: general_break,
                friday_end: Some(clock(18, 40)),
            },
        );
        shifts.insert(
            "A2".to_string(),
            ShiftRule {
                class: ShiftClass::GeneralStaff,
                start: clock(7, 40),
                end: clock(18, 40),
                break_hours: general_break,
                friday_end: Some(clock(19, 40)),
            },
        );
        shifts.insert(
            "B1".to_string(),
            ShiftRule {
                class: ShiftClass::FixedRoster,
                start: clock(8, 0),
                end: clock(18, 0),
                break_hours: Decimal::ONE,
                friday_end: None,
            },
        );

        Self::new(shifts, RuleThresholds::default())
    }

    /// Looks up the rule for a shift code.
    pub fn shift(&self, code: &str) -> Option<&ShiftRule> {
        self.shifts.get(&normalize_shift_code(code))
    }

    /// Returns the whole shift table.
    pub fn shifts(&self) -> &HashMap<String, ShiftRule> {
        &self.shifts
    }

    /// Returns the reference thresholds.
    pub fn rules(&self) -> &RuleThresholds {
        &self.rules
    }
}

/// Time of day from literal hour and minute values.
fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Canonical form of a shift code.
pub fn normalize_shift_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_general_staff_break_is_sum_of_three_breaks() {
        let config = EngineConfig::standard();
        assert_eq!(config.shift("A1").unwrap().break_hours, Decimal::new(183, 2));
    }

    #[test]
    fn test_only_a2_has_extended_friday() {
        let config = EngineConfig::standard();
        assert!(!config.shift("A1").unwrap().has_extended_friday());
        assert!(config.shift("A2").unwrap().has_extended_friday());
        assert!(!config.shift("B1").unwrap().has_extended_friday());
    }

    #[test]
    fn test_shift_lookup_is_normalized() {
        let config = EngineConfig::standard();
        assert!(config.shift(" b1 ").is_some());
        assert!(config.shift("C1").is_none());
    }

    #[test]
    fn test_fixed_roster_is_not_overtime_eligible() {
        let config = EngineConfig::standard();
        assert!(!config.shift("B1").unwrap().is_overtime_eligible());
    }

    #[test]
    fn test_shift_class_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftClass::GeneralStaff).unwrap(),
            "\"general_staff\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftClass::FixedRoster).unwrap(),
            "\"fixed_roster\""
        );
    }
}
