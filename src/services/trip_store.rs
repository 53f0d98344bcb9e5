use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use crate::error::TripError;
use crate::models::trip::{StoredTrip, TripDetailRow, TripSubmission};
use crate::schedule::time::to_period_time;

/// The trip backend, reached through plain request/response calls.
pub trait TripStore: Send + Sync {
    fn detail_rows(&self, trip_id: &str) -> Result<Vec<TripDetailRow>, TripError>;
    fn submit(&self, submission: TripSubmission) -> Result<StoredTrip, TripError>;
}

#[derive(Debug, Clone)]
struct StoredRecord {
    submission: TripSubmission,
    rows: Vec<TripDetailRow>,
}

/// Process-local backend. Rows are kept in the backend's 12-hour time format.
#[derive(Debug, Default)]
pub struct InMemoryTripStore {
    trips: RwLock<HashMap<String, StoredRecord>>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trips.
    pub fn len(&self) -> usize {
        self.trips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn submission(&self, trip_id: &str) -> Option<TripSubmission> {
        self.trips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(trip_id)
            .map(|record| record.submission.clone())
    }
}

impl TripStore for InMemoryTripStore {
    fn detail_rows(&self, trip_id: &str) -> Result<Vec<TripDetailRow>, TripError> {
        self.trips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(trip_id)
            .map(|record| record.rows.clone())
            .ok_or_else(|| TripError::NotFound(trip_id.to_string()))
    }

    fn submit(&self, submission: TripSubmission) -> Result<StoredTrip, TripError> {
        let rows = submission
            .details
            .iter()
            .map(|detail| -> Result<TripDetailRow, TripError> {
                let time = if detail.time.trim().is_empty() {
                    None
                } else {
                    Some(to_period_time(&detail.time)?)
                };
                Ok(TripDetailRow {
                    day: detail.day,
                    place: detail.place.clone(),
                    time,
                    content: detail.details.clone(),
                })
            })
            .collect::<Result<Vec<_>, TripError>>()?;

        let trip_id = Uuid::new_v4().to_string();
        let count = rows.len() as i64;

        self.trips
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(trip_id.clone(), StoredRecord { submission, rows });

        log::info!("Stored trip {} with {} detail rows", trip_id, count);
        Ok(StoredTrip { trip_id, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::PersistableEntry;
    use chrono::NaiveDate;

    fn detail(day: u32, time: &str) -> PersistableEntry {
        PersistableEntry {
            day,
            time: time.to_string(),
            place: format!("place {}", day),
            details: String::new(),
            place_type: 0,
            travel_time_car: "00:00:00".to_string(),
            travel_time_public: "00:00:00".to_string(),
        }
    }

    fn submission(details: Vec<PersistableEntry>) -> TripSubmission {
        TripSubmission {
            title: "Spring in Jeju".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
            photos: vec![],
            details,
        }
    }

    #[test]
    fn test_submit_then_read_rows() {
        let store = InMemoryTripStore::new();
        let stored = store
            .submit(submission(vec![detail(1, "15:00:00"), detail(2, "")]))
            .unwrap();
        assert_eq!(stored.count, 2);
        assert_eq!(store.len(), 1);

        let rows = store.detail_rows(&stored.trip_id).unwrap();
        assert_eq!(rows[0].time.as_deref(), Some("PM 03:00:00"));
        assert_eq!(rows[1].time, None);
        assert_eq!(
            store.submission(&stored.trip_id).unwrap().title,
            "Spring in Jeju"
        );
    }

    #[test]
    fn test_unknown_trip() {
        let store = InMemoryTripStore::new();
        assert!(matches!(
            store.detail_rows("missing"),
            Err(TripError::NotFound(_))
        ));
    }

    #[test]
    fn test_bad_time_is_rejected_and_nothing_stored() {
        let store = InMemoryTripStore::new();
        assert!(matches!(
            store.submit(submission(vec![detail(1, "quarter past")])),
            Err(TripError::Time(_))
        ));
        assert!(store.is_empty());
    }
}
