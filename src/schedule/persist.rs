use crate::error::ScheduleError;
use crate::models::schedule::{ScheduleEntry, ScheduleList};
use crate::models::trip::{PersistableEntry, TripDetailRow};

use super::time::normalize_time;

// Route-time estimation doesn't exist yet; the backend takes these as-is.
pub const PLACEHOLDER_PLACE_TYPE: i32 = 0;
pub const PLACEHOLDER_TRAVEL_TIME_CAR: &str = "00:00:00";
pub const PLACEHOLDER_TRAVEL_TIME_PUBLIC: &str = "00:00:00";

/// Build the editable list for an existing trip, one entry per detail row.
///
/// A trip without rows opens like a new one, with the seed entry.
pub fn from_detail_rows(rows: Vec<TripDetailRow>) -> Result<ScheduleList, ScheduleError> {
    if rows.is_empty() {
        return Ok(ScheduleList::seed());
    }

    let entries = rows
        .into_iter()
        .map(|row| ScheduleEntry {
            day: row.day,
            time: normalize_time(row.time.as_deref()),
            place: row.place,
            details: row.content,
        })
        .collect();

    ScheduleList::try_from_entries(entries)
}

pub fn to_persistable(list: &ScheduleList) -> Vec<PersistableEntry> {
    list.iter()
        .map(|entry| PersistableEntry {
            day: entry.day,
            time: entry.time.clone(),
            place: entry.place.clone(),
            details: entry.details.clone(),
            place_type: PLACEHOLDER_PLACE_TYPE,
            travel_time_car: PLACEHOLDER_TRAVEL_TIME_CAR.to_string(),
            travel_time_public: PLACEHOLDER_TRAVEL_TIME_PUBLIC.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: u32, place: &str, time: Option<&str>, content: &str) -> TripDetailRow {
        TripDetailRow {
            day,
            place: place.to_string(),
            time: time.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_rows_map_to_entries() {
        let list = from_detail_rows(vec![
            row(1, "Seongsan", Some("AM 06:30:00"), "sunrise peak"),
            row(1, "Udo", None, ""),
            row(2, "Hallasan", Some("PM 01:15:00"), "hike"),
        ])
        .unwrap();

        let entries = list.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].time, "06:30:00");
        assert_eq!(entries[0].details, "sunrise peak");
        assert_eq!(entries[1].time, "00:00:00");
        assert_eq!(entries[2].day, 2);
        assert_eq!(entries[2].place, "Hallasan");
        assert_eq!(entries[2].time, "13:15:00");
    }

    #[test]
    fn test_no_rows_gives_seed() {
        assert_eq!(from_detail_rows(vec![]).unwrap(), ScheduleList::seed());
    }

    #[test]
    fn test_row_with_day_zero_is_rejected() {
        assert!(from_detail_rows(vec![row(0, "x", None, "")]).is_err());
    }

    #[test]
    fn test_to_persistable_is_one_to_one() {
        let list = from_detail_rows(vec![
            row(1, "Seongsan", Some("AM 06:30:00"), "sunrise peak"),
            row(2, "Hallasan", Some("PM 01:15:00"), "hike"),
        ])
        .unwrap();

        let out = to_persistable(&list);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].day, 2);
        assert_eq!(out[1].time, "13:15:00");
        assert_eq!(out[1].place, "Hallasan");
        assert_eq!(out[1].details, "hike");
        assert_eq!(out[0].place_type, PLACEHOLDER_PLACE_TYPE);
        assert_eq!(out[0].travel_time_car, PLACEHOLDER_TRAVEL_TIME_CAR);
        assert_eq!(out[0].travel_time_public, PLACEHOLDER_TRAVEL_TIME_PUBLIC);

        let json = serde_json::to_value(&out[0]).unwrap();
        assert!(json.get("travelTimeCar").is_some());
        assert!(json.get("placeType").is_some());
    }
}
