//! Tiered overtime calculation.
//!
//! Overtime only accrues on general-staff shifts. The eligible span of a
//! day is quantized down to half-unit steps and lands in exactly one tier:
//!
//! | Day                      | Eligible span           | Tier                      |
//! |--------------------------|-------------------------|---------------------------|
//! | `PH`                     | all worked hours        | 2.0x up to the cap, then 3.0x |
//! | Sunday                   | all worked hours        | 2.0x                      |
//! | Saturday                 | all worked hours        | 1.5x                      |
//! | any other day            | hours beyond the standard day | 1.5x                |
//!
//! `REST` and `OFF` days earn nothing, whatever the weekday.

use chrono::Weekday;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{RuleThresholds, ShiftRule};
use crate::models::{AttendanceRecord, DayType, MonthlyCounters, OvertimeSplit};

/// Quantizes an hour span down to 0.5-unit steps.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::quantize;
/// use rust_decimal::Decimal;
///
/// assert_eq!(quantize(Decimal::new(58, 2)), Decimal::new(5, 1));
/// assert_eq!(quantize(Decimal::new(149, 2)), Decimal::ONE);
/// assert_eq!(quantize(Decimal::new(-3, 0)), Decimal::ZERO);
/// ```
pub fn quantize(hours: Decimal) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let two = Decimal::TWO;
    ((hours * two).floor() / two).normalize()
}

/// Splits one day's worked hours into overtime tiers.
///
/// Pure; see [`compute_overtime`] for the variant that credits the
/// monthly counters.
pub fn calculate_overtime(
    day_type: &DayType,
    worked_hours: Decimal,
    weekday: Weekday,
    shift: Option<&ShiftRule>,
    rules: &RuleThresholds,
) -> OvertimeSplit {
    let eligible = shift.is_some_and(ShiftRule::is_overtime_eligible);
    if !eligible || matches!(day_type, DayType::Rest | DayType::Off) {
        return OvertimeSplit::default();
    }

    if *day_type == DayType::PublicHoliday {
        let units = quantize(worked_hours);
        let at_2_0 = units.min(rules.holiday_double_cap);
        return OvertimeSplit {
            at_2_0,
            at_3_0: units - at_2_0,
            ..Default::default()
        };
    }

    match weekday {
        Weekday::Sun => OvertimeSplit {
            at_2_0: quantize(worked_hours),
            ..Default::default()
        },
        Weekday::Sat => OvertimeSplit {
            at_1_5: quantize(worked_hours),
            ..Default::default()
        },
        _ => OvertimeSplit {
            at_1_5: quantize(worked_hours - rules.standard_day_hours),
            ..Default::default()
        },
    }
}

/// Computes one day's overtime units and credits the tier buckets.
///
/// Returns the day's total units. Ineligible shifts return zero and leave
/// `counters` untouched.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::compute_overtime;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, DayType, MonthlyCounters};
/// use chrono::{NaiveDate, NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::standard();
/// let record = AttendanceRecord {
///     employee_id: "E001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     weekday: Weekday::Wed,
///     clock_in: NaiveTime::from_hms_opt(7, 45, 0),
///     clock_out: NaiveTime::from_hms_opt(19, 10, 0),
/// };
/// let mut counters = MonthlyCounters::default();
///
/// let units = compute_overtime(
///     &record,
///     &DayType::Work,
///     Decimal::new(959, 2),
///     config.shift("A1"),
///     config.rules(),
///     &mut counters,
/// );
/// assert_eq!(units, Decimal::new(5, 1));
/// assert_eq!(counters.ot_1_5, Decimal::new(5, 1));
/// ```
pub fn compute_overtime(
    record: &AttendanceRecord,
    day_type: &DayType,
    worked_hours: Decimal,
    shift: Option<&ShiftRule>,
    rules: &RuleThresholds,
    counters: &mut MonthlyCounters,
) -> Decimal {
    let split = calculate_overtime(day_type, worked_hours, record.weekday, shift, rules);
    let units = split.total();

    if units > Decimal::ZERO {
        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            at_1_5 = %split.at_1_5,
            at_2_0 = %split.at_2_0,
            at_3_0 = %split.at_3_0,
            "Overtime credited"
        );
        counters.credit_overtime(&split);
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn split(config: &EngineConfig, day: DayType, hours: &str, weekday: Weekday, shift: &str) -> OvertimeSplit {
        calculate_overtime(&day, dec(hours), weekday, config.shift(shift), config.rules())
    }

    // ==========================================================================
    // OT-001: weekday overtime counts only hours beyond the standard day
    // ==========================================================================
    #[test]
    fn test_ot_001_weekday_beyond_standard_day() {
        let config = EngineConfig::standard();

        let result = split(&config, DayType::Work, "9.59", Weekday::Wed, "A1");
        assert_eq!(result.at_1_5, dec("0.5"));
        assert_eq!(result.total(), dec("0.5"));

        let result = split(&config, DayType::Work, "11.2", Weekday::Thu, "A2");
        assert_eq!(result.at_1_5, dec("2"));
    }

    #[test]
    fn test_weekday_under_standard_day_is_zero() {
        let config = EngineConfig::standard();
        let result = split(&config, DayType::Work, "8.75", Weekday::Mon, "A1");
        assert_eq!(result, OvertimeSplit::default());
    }

    // ==========================================================================
    // OT-002: Saturday OT day pays full hours at 1.5x
    // ==========================================================================
    #[test]
    fn test_ot_002_saturday_full_hours_at_1_5() {
        let config = EngineConfig::standard();
        let result = split(&config, DayType::Overtime, "5.2", Weekday::Sat, "A1");

        assert_eq!(result.at_1_5, dec("5"));
        assert_eq!(result.at_2_0, Decimal::ZERO);
    }

    // ==========================================================================
    // OT-003: public holiday splits at the double-time cap
    // ==========================================================================
    #[test]
    fn test_ot_003_public_holiday_cap() {
        let config = EngineConfig::standard();

        let under = split(&config, DayType::PublicHoliday, "6.3", Weekday::Thu, "A1");
        assert_eq!(under.at_2_0, dec("6"));
        assert_eq!(under.at_3_0, Decimal::ZERO);

        let over = split(&config, DayType::PublicHoliday, "9.17", Weekday::Thu, "A1");
        assert_eq!(over.at_2_0, dec("8"));
        assert_eq!(over.at_3_0, dec("1"));

        let exactly = split(&config, DayType::PublicHoliday, "8.2", Weekday::Thu, "A1");
        assert_eq!(exactly.at_2_0, dec("8"));
        assert_eq!(exactly.at_3_0, Decimal::ZERO);
    }

    // ==========================================================================
    // OT-004: REST and OFF earn nothing
    // ==========================================================================
    #[test]
    fn test_ot_004_rest_and_off_earn_nothing() {
        let config = EngineConfig::standard();

        // Sunday 08:00-16:00 on A1: 8h - 1.83h = 6.17h worked
        assert_eq!(
            split(&config, DayType::Rest, "6.17", Weekday::Sun, "A1"),
            OvertimeSplit::default()
        );
        assert_eq!(
            split(&config, DayType::Off, "6.17", Weekday::Fri, "A1"),
            OvertimeSplit::default()
        );
    }

    // ==========================================================================
    // OT-005: Sunday festival pays full hours at 2.0x
    // ==========================================================================
    #[test]
    fn test_ot_005_sunday_festival_at_2_0() {
        let config = EngineConfig::standard();
        let festival = DayType::Festival("Thaipusam".to_string());

        let result = split(&config, festival, "6.17", Weekday::Sun, "A1");
        assert_eq!(result.at_2_0, dec("6"));
        assert_eq!(result.at_1_5, Decimal::ZERO);
    }

    // ==========================================================================
    // OT-006: fixed-roster and unknown shifts never earn overtime
    // ==========================================================================
    #[test]
    fn test_ot_006_ineligible_shift_leaves_counters_untouched() {
        let config = EngineConfig::standard();
        let record = AttendanceRecord {
            employee_id: "E002".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            weekday: Weekday::Thu,
            clock_in: None,
            clock_out: None,
        };
        let mut counters = MonthlyCounters::default();

        let units = compute_overtime(
            &record,
            &DayType::PublicHoliday,
            dec("9"),
            config.shift("B1"),
            config.rules(),
            &mut counters,
        );
        assert_eq!(units, Decimal::ZERO);

        let units = compute_overtime(
            &record,
            &DayType::PublicHoliday,
            dec("9"),
            None,
            config.rules(),
            &mut counters,
        );
        assert_eq!(units, Decimal::ZERO);
        assert_eq!(counters, MonthlyCounters::default());
    }

    #[test]
    fn test_compute_overtime_accumulates_across_days() {
        let config = EngineConfig::standard();
        let mut counters = MonthlyCounters::default();
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let holiday = AttendanceRecord {
            employee_id: "E001".to_string(),
            date,
            weekday: Weekday::Thu,
            clock_in: None,
            clock_out: None,
        };
        let saturday = AttendanceRecord {
            date: date + chrono::Days::new(2),
            weekday: Weekday::Sat,
            ..holiday.clone()
        };

        compute_overtime(&holiday, &DayType::PublicHoliday, dec("10.6"), config.shift("A1"), config.rules(), &mut counters);
        compute_overtime(&saturday, &DayType::Overtime, dec("4.7"), config.shift("A1"), config.rules(), &mut counters);

        assert_eq!(counters.ot_2_0, dec("8"));
        assert_eq!(counters.ot_3_0, dec("2.5"));
        assert_eq!(counters.ot_1_5, dec("4.5"));
    }

    #[test]
    fn test_quantize_steps() {
        assert_eq!(quantize(dec("0.49")), Decimal::ZERO);
        assert_eq!(quantize(dec("0.5")), dec("0.5"));
        assert_eq!(quantize(dec("2.99")), dec("2.5"));
        assert_eq!(quantize(dec("3")), dec("3"));
        assert_eq!(quantize(Decimal::ZERO), Decimal::ZERO);
    }
}
