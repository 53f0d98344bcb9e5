use std::sync::Arc;

use chrono::Utc;

use crate::error::TripError;
use crate::models::schedule::ScheduleList;
use crate::models::trip::{SubmitResponse, TripDraft, TripSubmission};
use crate::schedule::persist::{from_detail_rows, to_persistable};

use super::trip_store::TripStore;

/// Trip write flow: start a draft, open an existing trip for edit, submit.
pub struct TripService {
    store: Arc<dyn TripStore>,
}

impl TripService {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self { store }
    }

    /// A fresh draft dated today with the seed schedule.
    pub fn start(&self) -> TripDraft {
        let today = Utc::now().date_naive();
        TripDraft {
            title: String::new(),
            start_date: today,
            end_date: today,
            photos: Vec::new(),
            schedule: ScheduleList::seed(),
        }
    }

    pub fn load(&self, trip_id: &str) -> Result<ScheduleList, TripError> {
        let rows = self.store.detail_rows(trip_id)?;
        log::debug!("Loaded {} detail rows for trip {}", rows.len(), trip_id);
        Ok(from_detail_rows(rows)?)
    }

    pub fn submit(&self, draft: TripDraft) -> Result<SubmitResponse, TripError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TripError::Invalid("title is required".to_string()));
        }
        if draft.end_date < draft.start_date {
            return Err(TripError::Invalid(format!(
                "end date {} is before start date {}",
                draft.end_date, draft.start_date
            )));
        }

        let submission = TripSubmission {
            title: title.to_string(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            photos: draft.photos,
            details: to_persistable(&draft.schedule),
        };

        let stored = self.store.submit(submission)?;
        Ok(SubmitResponse {
            success: stored.count >= 1,
            trip_id: stored.trip_id,
            count: stored.count,
        })
    }
}
