//! Day-type classification values.

use serde::{Deserialize, Serialize};

/// Classification of one employee-date.
///
/// Serialized as its report label (`WORK`, `REST`, `OFF`, `OT`, `PH`) or,
/// for personal holiday entries, the festival name verbatim.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayType;
///
/// assert_eq!(DayType::from_label("PH"), DayType::PublicHoliday);
/// assert_eq!(
///     DayType::from_label("Hari Raya"),
///     DayType::Festival("Hari Raya".to_string())
/// );
/// assert_eq!(DayType::Overtime.to_string(), "OT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DayType {
    /// Regular scheduled workday.
    Work,
    /// Weekly rest day (Sunday).
    Rest,
    /// Day off: unresolvable shift, fixed-roster Saturday, or company OFF day.
    Off,
    /// Overtime-eligible workday (general-staff Saturday).
    Overtime,
    /// Company-wide public holiday.
    PublicHoliday,
    /// Employee-specific holiday carrying its festival name.
    Festival(String),
}

impl DayType {
    /// Maps a label back to a day type. Unknown labels become festivals.
    pub fn from_label(label: &str) -> Self {
        match label {
            "WORK" => DayType::Work,
            "REST" => DayType::Rest,
            "OFF" => DayType::Off,
            "OT" => DayType::Overtime,
            "PH" => DayType::PublicHoliday,
            other => DayType::Festival(other.to_string()),
        }
    }

    /// Returns the report label for this day type.
    pub fn label(&self) -> &str {
        match self {
            DayType::Work => "WORK",
            DayType::Rest => "REST",
            DayType::Off => "OFF",
            DayType::Overtime => "OT",
            DayType::PublicHoliday => "PH",
            DayType::Festival(name) => name,
        }
    }

    /// Late and early minutes are only tracked on `WORK` and `OT` days.
    pub fn tracks_punctuality(&self) -> bool {
        matches!(self, DayType::Work | DayType::Overtime)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<DayType> for String {
    fn from(day_type: DayType) -> Self {
        day_type.label().to_string()
    }
}

impl From<String> for DayType {
    fn from(label: String) -> Self {
        DayType::from_label(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for day_type in [
            DayType::Work,
            DayType::Rest,
            DayType::Off,
            DayType::Overtime,
            DayType::PublicHoliday,
        ] {
            assert_eq!(DayType::from_label(day_type.label()), day_type);
        }
    }

    #[test]
    fn test_festival_serializes_verbatim() {
        let festival = DayType::Festival("Deepavali".to_string());
        assert_eq!(serde_json::to_string(&festival).unwrap(), "\"Deepavali\"");
    }

    #[test]
    fn test_public_holiday_serializes_as_ph() {
        assert_eq!(
            serde_json::to_string(&DayType::PublicHoliday).unwrap(),
            "\"PH\""
        );
        let parsed: DayType = serde_json::from_str("\"PH\"").unwrap();
        assert_eq!(parsed, DayType::PublicHoliday);
    }

    #[test]
    fn test_only_work_and_ot_track_punctuality() {
        assert!(DayType::Work.tracks_punctuality());
        assert!(DayType::Overtime.tracks_punctuality());
        assert!(!DayType::Rest.tracks_punctuality());
        assert!(!DayType::PublicHoliday.tracks_punctuality());
        assert!(!DayType::Festival("X".to_string()).tracks_punctuality());
    }
}
