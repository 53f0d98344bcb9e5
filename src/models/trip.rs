use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::ScheduleList;

/// A persisted trip detail row as the trip backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetailRow {
    pub day: u32,
    #[serde(default)]
    pub place: String,
    pub time: Option<String>, // 12-hour, "AM 09:30:00" / "PM 03:00:00"
    #[serde(default)]
    pub content: String,
}

/// Submit-time form of a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistableEntry {
    pub day: u32,
    pub time: String,
    pub place: String,
    pub details: String,
    pub place_type: i32,
    pub travel_time_car: String,
    pub travel_time_public: String,
}

/// A trip being written or edited by the user. Never stored until submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    #[serde(default)]
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub photos: Vec<String>,
    pub schedule: ScheduleList,
}

/// What the trip backend receives on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSubmission {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub photos: Vec<String>,
    pub details: Vec<PersistableEntry>,
}

/// Receipt handed back by a [`crate::services::trip_store::TripStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTrip {
    pub trip_id: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub trip_id: String,
    pub count: i64,
    pub success: bool, // count >= 1
}
