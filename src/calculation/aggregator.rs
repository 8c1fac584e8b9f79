//! Weekly and monthly roll-up of one employee's enriched records.

use chrono::Weekday;

use crate::models::{
    DailyRecord, MonthlyCounters, MonthlySummary, ReportRow, WeeklyCounters, WeeklySummary,
};

/// Folds a date-ordered record sequence into report rows and the final
/// monthly snapshot.
///
/// A weekly summary row follows every Sunday record and the final record
/// of the sequence (once, if the final record is itself a Sunday). Weekly
/// counters reset after each summary; `monthly` never resets.
///
/// `monthly` arrives holding the overtime buckets, meal units and the
/// cannot-OT count credited during enrichment.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate;
/// use attendance_engine::models::MonthlyCounters;
///
/// let (rows, summary) = aggregate(vec![], MonthlyCounters::default());
/// assert!(rows.is_empty());
/// assert_eq!(summary.counters, MonthlyCounters::default());
/// ```
pub fn aggregate(
    records: Vec<DailyRecord>,
    mut monthly: MonthlyCounters,
) -> (Vec<ReportRow>, MonthlySummary) {
    let mut rows = Vec::with_capacity(records.len() + records.len() / 7 + 1);
    let mut weekly = WeeklyCounters::default();
    let last = records.len().saturating_sub(1);

    for (index, record) in records.into_iter().enumerate() {
        weekly.add(&record);
        monthly.fold_record(&record);

        let closes_week = record.weekday == Weekday::Sun || index == last;
        let through = record.date;
        rows.push(ReportRow::day(record));

        if closes_week {
            let totals = std::mem::take(&mut weekly);
            rows.push(ReportRow::summary(WeeklySummary::new(through, totals)));
        }
    }

    (rows, monthly.finalize())
}
