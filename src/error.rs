use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("at least one schedule entry must remain")]
    LastEntry,
    #[error("index {index} is out of range for a schedule of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
    #[error("time {0:?} is not a valid HH:MM:SS clock value")]
    InvalidTime(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("time {0:?} is missing an AM/PM period token")]
    MissingPeriod(String),
    #[error("time {0:?} has an unknown period token")]
    UnknownPeriod(String),
    #[error("time {0:?} is not a valid HH:MM:SS clock value")]
    MalformedClock(String),
}

#[derive(Debug, Error)]
pub enum TripError {
    #[error("trip {0} not found")]
    NotFound(String),
    #[error("invalid trip: {0}")]
    Invalid(String),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Error type returned by every HTTP handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Trip(#[from] TripError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Schedule(err) | ApiError::Trip(TripError::Schedule(err)) => match err {
                ScheduleError::LastEntry => StatusCode::CONFLICT,
                ScheduleError::IndexOutOfRange { .. }
                | ScheduleError::InvalidSchedule(_)
                | ScheduleError::InvalidTime(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::Trip(TripError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Trip(TripError::Invalid(_)) | ApiError::Trip(TripError::Time(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Trip(TripError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Request rejected: {}", self);
        }
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}
