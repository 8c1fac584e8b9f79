//! Day classification.
//!
//! Determines the [`DayType`] of one attendance record from the employee's
//! shift rule, the weekday and the holiday calendar.

use chrono::Weekday;
use tracing::debug;

use crate::config::{ShiftClass, ShiftRule};
use crate::models::{AttendanceRecord, DayType};
use crate::store::HolidayCalendar;

/// Festival name on a general holiday that gives general staff the day off.
pub const GENERAL_OFF_MARKER: &str = "OFF";

/// Classifies one attendance record.
///
/// Rules, in priority order:
///
/// 1. No resolvable shift rule: `OFF`.
/// 2. Employee-specific holiday: its festival name, verbatim.
/// 3. General holiday: `OFF` when the festival name is `OFF` and the shift is
///    general staff, otherwise `PH`.
/// 4. Sunday: `REST`.
/// 5. Saturday: `OFF` for fixed-roster shifts, `OT` for general staff.
/// 6. Otherwise `WORK`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, DayType};
/// use attendance_engine::store::HolidayCalendar;
/// use chrono::{NaiveDate, Weekday};
///
/// let config = EngineConfig::standard();
/// let record = AttendanceRecord {
///     employee_id: "E001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     weekday: Weekday::Sat,
///     clock_in: None,
///     clock_out: None,
/// };
/// let holidays = HolidayCalendar::default();
///
/// assert_eq!(classify(&record, config.shift("A1"), &holidays), DayType::Overtime);
/// assert_eq!(classify(&record, config.shift("B1"), &holidays), DayType::Off);
/// assert_eq!(classify(&record, None, &holidays), DayType::Off);
/// ```
pub fn classify(
    record: &AttendanceRecord,
    shift: Option<&ShiftRule>,
    holidays: &HolidayCalendar,
) -> DayType {
    let Some(shift) = shift else {
        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            "No shift rule; classified OFF"
        );
        return DayType::Off;
    };

    if let Some(festival) = holidays.personal(&record.employee_id, record.date) {
        return DayType::from_label(festival);
    }

    if let Some(festival) = holidays.general(record.date) {
        if festival == GENERAL_OFF_MARKER && shift.class == ShiftClass::GeneralStaff {
            return DayType::Off;
        }
        return DayType::PublicHoliday;
    }

    match record.weekday {
        Weekday::Sun => DayType::Rest,
        Weekday::Sat => match shift.class {
            ShiftClass::FixedRoster => DayType::Off,
            ShiftClass::GeneralStaff => DayType::Overtime,
        },
        _ => DayType::Work,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::HolidayEntry;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(date: &str, weekday: Weekday) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "E001".to_string(),
            date: make_date(date),
            weekday,
            clock_in: None,
            clock_out: None,
        }
    }

    fn holiday(employee_id: Option<&str>, date: &str, name: &str) -> HolidayEntry {
        HolidayEntry {
            employee_id: employee_id.map(str::to_string),
            date: make_date(date),
            festival_name: name.to_string(),
        }
    }

    // ==========================================================================
    // DC-001: weekday on a known shift is WORK
    // ==========================================================================
    #[test]
    fn test_dc_001_weekday_is_work() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::default();

        // 2026-01-14 is a Wednesday
        let day = classify(&record("2026-01-14", Weekday::Wed), config.shift("A1"), &holidays);
        assert_eq!(day, DayType::Work);
    }

    // ==========================================================================
    // DC-002: Sunday is REST for both shift classes
    // ==========================================================================
    #[test]
    fn test_dc_002_sunday_is_rest() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::default();
        let sunday = record("2026-01-18", Weekday::Sun);

        assert_eq!(classify(&sunday, config.shift("A1"), &holidays), DayType::Rest);
        assert_eq!(classify(&sunday, config.shift("B1"), &holidays), DayType::Rest);
    }

    // ==========================================================================
    // DC-003: Saturday depends on shift class
    // ==========================================================================
    #[test]
    fn test_dc_003_saturday_by_shift_class() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::default();
        let saturday = record("2026-01-17", Weekday::Sat);

        assert_eq!(classify(&saturday, config.shift("A2"), &holidays), DayType::Overtime);
        assert_eq!(classify(&saturday, config.shift("B1"), &holidays), DayType::Off);
    }

    // ==========================================================================
    // DC-004: personal holiday overrides general calendar and weekday
    // ==========================================================================
    #[test]
    fn test_dc_004_personal_holiday_wins() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::new(vec![
            holiday(None, "2026-01-18", "Company Day"),
            holiday(Some("E001"), "2026-01-18", "Thaipusam"),
        ]);

        let day = classify(&record("2026-01-18", Weekday::Sun), config.shift("A1"), &holidays);
        assert_eq!(day, DayType::Festival("Thaipusam".to_string()));
    }

    // ==========================================================================
    // DC-005: general holiday is PH
    // ==========================================================================
    #[test]
    fn test_dc_005_general_holiday_is_ph() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::new(vec![holiday(None, "2026-01-01", "New Year")]);
        let new_year = record("2026-01-01", Weekday::Thu);

        assert_eq!(classify(&new_year, config.shift("A1"), &holidays), DayType::PublicHoliday);
        assert_eq!(classify(&new_year, config.shift("B1"), &holidays), DayType::PublicHoliday);
    }

    // ==========================================================================
    // DC-006: general OFF marker only applies to general staff
    // ==========================================================================
    #[test]
    fn test_dc_006_general_off_marker() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::new(vec![holiday(None, "2026-01-02", "OFF")]);
        let day = record("2026-01-02", Weekday::Fri);

        assert_eq!(classify(&day, config.shift("A1"), &holidays), DayType::Off);
        assert_eq!(classify(&day, config.shift("B1"), &holidays), DayType::PublicHoliday);
    }

    // ==========================================================================
    // DC-007: unresolvable shift is OFF even on holidays
    // ==========================================================================
    #[test]
    fn test_dc_007_missing_shift_is_off() {
        let holidays = HolidayCalendar::new(vec![holiday(Some("E001"), "2026-01-14", "Birthday")]);
        let day = classify(&record("2026-01-14", Weekday::Wed), None, &holidays);
        assert_eq!(day, DayType::Off);
    }

    #[test]
    fn test_personal_holiday_label_maps_to_known_day_type() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::new(vec![holiday(Some("E001"), "2026-01-14", "OFF")]);

        let day = classify(&record("2026-01-14", Weekday::Wed), config.shift("A1"), &holidays);
        assert_eq!(day, DayType::Off);
    }

    #[test]
    fn test_holiday_for_other_employee_ignored() {
        let config = EngineConfig::standard();
        let holidays = HolidayCalendar::new(vec![holiday(Some("E999"), "2026-01-14", "Birthday")]);

        let day = classify(&record("2026-01-14", Weekday::Wed), config.shift("A1"), &holidays);
        assert_eq!(day, DayType::Work);
    }
}
