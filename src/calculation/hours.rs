//! Worked-hours and punctuality calculation.
//!
//! Net worked hours are measured from the later of clock-in and the
//! shift's scheduled start up to clock-out, minus the shift's unpaid
//! breaks. Late and early minutes are measured against the fixed
//! reference thresholds, not against the shift schedule.

use chrono::{Duration, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{RuleThresholds, ShiftRule};
use crate::models::{AttendanceRecord, DayType};

/// Hours and punctuality of one attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursResult {
    /// Net worked hours, never negative, rounded to 2 decimals.
    pub worked_hours: Decimal,
    /// Minutes late, or `None` when not applicable.
    pub late_minutes: Option<u32>,
    /// Minutes early, or `None` when not applicable.
    pub early_minutes: Option<u32>,
}

/// Computes worked hours and late/early minutes for one record.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::compute_hours;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, DayType};
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
///
/// let result = compute_hours(&record, &DayType::Work, config.shift("A1"), config.rules());
/// assert_eq!(result.worked_hours, Decimal::new(959, 2)); // 11.42 - 1.83
/// assert_eq!(result.late_minutes, None);
/// assert_eq!(result.early_minutes, None);
/// ```
pub fn compute_hours(
    record: &AttendanceRecord,
    day_type: &DayType,
    shift: Option<&ShiftRule>,
    rules: &RuleThresholds,
) -> HoursResult {
    HoursResult {
        worked_hours: worked_hours(record, shift, rules),
        late_minutes: late_minutes(record, day_type, rules),
        early_minutes: early_minutes(record, day_type, rules),
    }
}

/// Net worked hours of one record.
///
/// Zero when either punch is missing or the shift has no rule.
pub fn worked_hours(
    record: &AttendanceRecord,
    shift: Option<&ShiftRule>,
    rules: &RuleThresholds,
) -> Decimal {
    let (Some(clock_in), Some(clock_out), Some(shift)) = (record.clock_in, record.clock_out, shift)
    else {
        return Decimal::ZERO;
    };

    let start = record.date.and_time(clock_in.max(shift.start));
    let mut end = record.date.and_time(clock_out);
    if clock_out < clock_in {
        // Overnight: clock-out belongs to the next day.
        end += Duration::days(1);
    }

    let span = Decimal::new((end - start).num_seconds(), 0) / Decimal::new(3600, 0);

    let mut unpaid = shift.break_hours;
    if record.weekday == Weekday::Fri && shift.has_extended_friday() {
        unpaid += rules.friday_extra_unpaid_hours;
    }

    (span - unpaid)
        .max(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Minutes the clock-in falls after the reference start.
pub fn late_minutes(
    record: &AttendanceRecord,
    day_type: &DayType,
    rules: &RuleThresholds,
) -> Option<u32> {
    let clock_in = record.clock_in?;
    (day_type.tracks_punctuality() && clock_in > rules.reference_start)
        .then(|| whole_minutes(clock_in - rules.reference_start))
}

/// Minutes the clock-out falls before the reference end.
pub fn early_minutes(
    record: &AttendanceRecord,
    day_type: &DayType,
    rules: &RuleThresholds,
) -> Option<u32> {
    let clock_out = record.clock_out?;
    (day_type.tracks_punctuality() && clock_out < rules.reference_end)
        .then(|| whole_minutes(rules.reference_end - clock_out))
}

fn whole_minutes(delta: Duration) -> u32 {
    u32::try_from(delta.num_minutes()).unwrap_or(0)
}
