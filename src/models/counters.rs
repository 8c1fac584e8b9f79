//! Weekly and monthly attendance accumulators.
//!
//! A [`MonthlyCounters`] value is created fresh for each employee and
//! threaded by `&mut` through the overtime, leave and meal calculations;
//! the aggregator folds the remaining per-record fields into it and
//! finalizes it into a [`MonthlySummary`]. Nothing here is shared across
//! employees.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::DailyRecord;

/// Overtime units of one day split by pay multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Units at 1.5x.
    pub at_1_5: Decimal,
    /// Units at 2.0x.
    pub at_2_0: Decimal,
    /// Units at 3.0x.
    pub at_3_0: Decimal,
}

impl OvertimeSplit {
    /// Total units across all tiers.
    pub fn total(&self) -> Decimal {
        self.at_1_5 + self.at_2_0 + self.at_3_0
    }
}

/// Counters reset at every week boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCounters {
    /// Sum of late minutes.
    pub late_minutes: u32,
    /// Sum of early-leave minutes.
    pub early_minutes: u32,
    /// Days with exactly one punch.
    pub forgot_clocking: u32,
    /// Workdays with no punches and no leave.
    pub absent: u32,
    /// Net worked hours.
    pub worked_hours: Decimal,
    /// Overtime units.
    pub overtime_hours: Decimal,
    /// Leave days.
    pub leave_days: Decimal,
    /// Meal allowance units.
    pub meal_units: u32,
    /// Manual overtime, raw minutes.
    pub manual_ot_minutes: u32,
}

impl WeeklyCounters {
    /// Adds one enriched record.
    pub fn add(&mut self, record: &DailyRecord) {
        self.late_minutes += record.late_minutes.unwrap_or(0);
        self.early_minutes += record.early_minutes.unwrap_or(0);
        self.forgot_clocking += record.forgot_clocking;
        self.absent += record.absent;
        self.worked_hours += record.worked_hours;
        self.overtime_hours += record.overtime_units;
        self.leave_days += record.leave_days;
        self.meal_units += record.meal_units;
        self.manual_ot_minutes += record.manual_ot_minutes.unwrap_or(0);
    }
}

/// Counters accumulated over one employee's whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCounters {
    /// Sum of late minutes.
    pub late_minutes: u32,
    /// Sum of early-leave minutes.
    pub early_minutes: u32,
    /// Days with exactly one punch.
    pub forgot_clocking: u32,
    /// Workdays with no punches and no leave.
    pub absent: u32,
    /// Net worked hours.
    pub worked_hours: Decimal,
    /// Overtime units across all tiers.
    pub overtime_hours: Decimal,
    /// Leave days.
    pub leave_days: Decimal,
    /// Meal allowance units, credited by the meal resolver.
    pub meal_units: u32,
    /// Overtime units at 1.5x, credited by the overtime calculator.
    pub ot_1_5: Decimal,
    /// Overtime units at 2.0x, credited by the overtime calculator.
    pub ot_2_0: Decimal,
    /// Overtime units at 3.0x, credited by the overtime calculator.
    pub ot_3_0: Decimal,
    /// Overtime days that cannot be approved, credited by the leave resolver.
    pub cannot_ot: u32,
    /// Manual overtime, raw minutes.
    pub manual_ot_minutes: u32,
}

impl MonthlyCounters {
    /// Credits one day's overtime split to the tier buckets.
    pub fn credit_overtime(&mut self, split: &OvertimeSplit) {
        self.ot_1_5 += split.at_1_5;
        self.ot_2_0 += split.at_2_0;
        self.ot_3_0 += split.at_3_0;
    }

    /// Counts one overtime day that cannot be approved.
    pub fn credit_cannot_ot(&mut self) {
        self.cannot_ot += 1;
    }

    /// Credits granted meal units.
    pub fn credit_meal(&mut self, units: u32) {
        self.meal_units += units;
    }

    /// Folds the per-record fields of one enriched record.
    ///
    /// Meal units and the overtime buckets are left alone; they were
    /// credited while the record was being enriched.
    pub fn fold_record(&mut self, record: &DailyRecord) {
        self.late_minutes += record.late_minutes.unwrap_or(0);
        self.early_minutes += record.early_minutes.unwrap_or(0);
        self.forgot_clocking += record.forgot_clocking;
        self.absent += record.absent;
        self.worked_hours += record.worked_hours;
        self.overtime_hours += record.overtime_units;
        self.leave_days += record.leave_days;
        self.manual_ot_minutes += record.manual_ot_minutes.unwrap_or(0);
    }

    /// Produces the final snapshot with manual overtime converted to hours.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::MonthlyCounters;
    /// use rust_decimal::Decimal;
    ///
    /// let counters = MonthlyCounters {
    ///     ot_1_5: Decimal::new(35, 1),
    ///     manual_ot_minutes: 100,
    ///     ..Default::default()
    /// };
    /// let summary = counters.finalize();
    /// assert_eq!(summary.manual_ot_hours, Decimal::new(167, 2));
    /// assert_eq!(summary.final_ot_1_5, Decimal::new(517, 2));
    /// ```
    pub fn finalize(self) -> MonthlySummary {
        let manual_ot_hours = (Decimal::from(self.manual_ot_minutes) / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let final_ot_1_5 = self.ot_1_5 + manual_ot_hours;

        MonthlySummary {
            counters: self,
            manual_ot_hours,
            final_ot_1_5,
        }
    }
}

/// Finalized monthly snapshot for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The raw accumulated counters.
    #[serde(flatten)]
    pub counters: MonthlyCounters,
    /// Manual overtime in hours, rounded to 2 decimals.
    pub manual_ot_hours: Decimal,
    /// 1.5x bucket plus manual overtime hours.
    pub final_ot_1_5: Decimal,
}
