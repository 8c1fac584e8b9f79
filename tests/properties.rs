// Property-based tests for the attendance rule engine.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use attendance_engine::calculation::{calculate_overtime, compute_hours, quantize, run};
use attendance_engine::config::{ConfigLoader, EngineConfig};
use attendance_engine::models::{AttendanceRecord, DayType, Employee, RawAttendance};
use attendance_engine::store::ReferenceTables;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn config_64() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Arbitrary punch: a minute of the day, or missing.
fn arb_punch() -> impl Strategy<Value = Option<NaiveTime>> {
    prop_oneof![
        4 => (0u32..1440).prop_map(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0)),
        1 => Just(None),
    ]
}

fn arb_shift_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("A1"), Just("A2"), Just("B1"), Just("ZZ")]
}

fn arb_day_type() -> impl Strategy<Value = DayType> {
    prop_oneof![
        Just(DayType::Work),
        Just(DayType::Rest),
        Just(DayType::Off),
        Just(DayType::Overtime),
        Just(DayType::PublicHoliday),
        Just(DayType::Festival("Deepavali".to_string())),
    ]
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

/// Hours with two decimals between 0 and 24.
fn arb_hours() -> impl Strategy<Value = Decimal> {
    (0i64..=2400).prop_map(|cents| Decimal::new(cents, 2))
}

/// A sorted, de-duplicated set of January 2026 dates.
fn arb_dates() -> impl Strategy<Value = Vec<NaiveDate>> {
    prop::collection::btree_set(0u64..31, 1..31).prop_map(|offsets| {
        let first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        offsets.into_iter().map(|d| first + Days::new(d)).collect()
    })
}

fn fmt_punch(punch: Option<NaiveTime>) -> Option<String> {
    punch.map(|t| t.format("%H:%M").to_string())
}

fn employee(id: &str, shift: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: id.to_string(),
        department: "DL".to_string(),
        shift: shift.to_string(),
        employee_type: None,
        on_board_date: None,
        leave_date: None,
    }
}

fn attendance(id: &str, rows: &[(NaiveDate, Option<NaiveTime>, Option<NaiveTime>)]) -> Vec<RawAttendance> {
    rows.iter()
        .map(|(date, clock_in, clock_out)| RawAttendance {
            employee_id: id.to_string(),
            date: *date,
            day: None,
            clock_in: fmt_punch(*clock_in),
            clock_out: fmt_punch(*clock_out),
            department: None,
        })
        .collect()
}

fn arb_month_rows() -> impl Strategy<Value = Vec<(NaiveDate, Option<NaiveTime>, Option<NaiveTime>)>> {
    arb_dates().prop_flat_map(|dates| {
        let n = dates.len();
        (Just(dates), prop::collection::vec((arb_punch(), arb_punch()), n)).prop_map(
            |(dates, punches)| {
                dates
                    .into_iter()
                    .zip(punches)
                    .map(|(date, (clock_in, clock_out))| (date, clock_in, clock_out))
                    .collect()
            },
        )
    })
}

// ---------------------------------------------------------------------------
// Per-record properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn worked_hours_never_negative(
        clock_in in arb_punch(),
        clock_out in arb_punch(),
        weekday in arb_weekday(),
        shift in arb_shift_code(),
        day_type in arb_day_type(),
    ) {
        let config = EngineConfig::standard();
        let record = AttendanceRecord {
            employee_id: "E001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            weekday,
            clock_in,
            clock_out,
        };

        let result = compute_hours(&record, &day_type, config.shift(shift), config.rules());

        prop_assert!(result.worked_hours >= Decimal::ZERO);
        prop_assert!(result.worked_hours <= Decimal::new(24, 0));
        prop_assert!(result.worked_hours.scale() <= 2);
        if !record.has_both_punches() || config.shift(shift).is_none() {
            prop_assert_eq!(result.worked_hours, Decimal::ZERO);
        }
    }

    #[test]
    fn late_and_early_are_positive_or_absent(
        clock_in in arb_punch(),
        clock_out in arb_punch(),
        day_type in arb_day_type(),
    ) {
        let config = EngineConfig::standard();
        let record = AttendanceRecord {
            employee_id: "E001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            weekday: Weekday::Wed,
            clock_in,
            clock_out,
        };

        let result = compute_hours(&record, &day_type, config.shift("A1"), config.rules());

        if let Some(late) = result.late_minutes {
            prop_assert!(late > 0);
            prop_assert!(clock_in.is_some_and(|t| t > config.rules().reference_start));
            prop_assert!(day_type.tracks_punctuality());
        }
        if let Some(early) = result.early_minutes {
            prop_assert!(early > 0);
            prop_assert!(clock_out.is_some_and(|t| t < config.rules().reference_end));
            prop_assert!(day_type.tracks_punctuality());
        }
        if !day_type.tracks_punctuality() {
            prop_assert_eq!(result.late_minutes, None);
            prop_assert_eq!(result.early_minutes, None);
        }
    }

    #[test]
    fn overtime_is_half_unit_quantized(
        hours in arb_hours(),
        weekday in arb_weekday(),
        shift in arb_shift_code(),
        day_type in arb_day_type(),
    ) {
        let config = EngineConfig::standard();
        let split = calculate_overtime(&day_type, hours, weekday, config.shift(shift), config.rules());

        for units in [split.at_1_5, split.at_2_0, split.at_3_0, split.total()] {
            prop_assert!(units >= Decimal::ZERO);
            prop_assert_eq!((units * Decimal::TWO).fract(), Decimal::ZERO);
        }
        prop_assert!(split.total() <= hours);
        prop_assert!(split.at_2_0 <= Decimal::new(8, 0) || day_type != DayType::PublicHoliday);
    }

    #[test]
    fn quantize_is_floor_to_half(hours in arb_hours()) {
        let units = quantize(hours);
        prop_assert!(units <= hours);
        prop_assert!(hours - units < Decimal::new(5, 1));
    }
}

// ---------------------------------------------------------------------------
// Whole-run properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_64())]

    #[test]
    fn no_cross_employee_leakage(
        first in arb_month_rows(),
        second in arb_month_rows(),
    ) {
        let loader = ConfigLoader::from_config(EngineConfig::standard());

        let alone = run(&loader, ReferenceTables {
            employees: vec![employee("E002", "A2")],
            attendance: attendance("E002", &second),
            ..Default::default()
        });
        let together = run(&loader, ReferenceTables {
            employees: vec![employee("E001", "A1"), employee("E002", "A2")],
            attendance: attendance("E001", &first)
                .into_iter()
                .chain(attendance("E002", &second))
                .collect(),
            ..Default::default()
        });

        let alone_report = alone.employees().find(|e| e.employee_id == "E002").unwrap();
        let together_report = together.employees().find(|e| e.employee_id == "E002").unwrap();
        prop_assert_eq!(&alone_report.monthly, &together_report.monthly);
        prop_assert_eq!(&alone_report.rows, &together_report.rows);
    }

    #[test]
    fn one_summary_per_week_boundary(rows in arb_month_rows()) {
        let loader = ConfigLoader::from_config(EngineConfig::standard());
        let sundays = rows.iter().filter(|(date, _, _)| date.weekday() == Weekday::Sun).count();
        let ends_on_sunday = rows.last().is_some_and(|(date, _, _)| date.weekday() == Weekday::Sun);
        let expected = sundays + usize::from(!ends_on_sunday);

        let report = run(&loader, ReferenceTables {
            employees: vec![employee("E001", "A1")],
            attendance: attendance("E001", &rows),
            ..Default::default()
        });
        let emp = report.employees().next().unwrap();

        let summaries = emp.rows.iter().filter(|row| row.is_summary()).count();
        prop_assert_eq!(summaries, expected);
        prop_assert!(!emp.rows[0].is_summary());
        prop_assert!(emp.rows.last().unwrap().is_summary());
    }
}
