use crate::{error::ApiError, models::trip::TripDraft, services::trip_service::TripService};
use actix_web::{web, HttpResponse, Responder};

/*
    /api/trips/new
*/
pub async fn new_draft(service: web::Data<TripService>) -> impl Responder {
    HttpResponse::Ok().json(service.start())
}

/*
    /api/trips/{id}/schedule
*/
pub async fn get_schedule(
    path: web::Path<String>,
    service: web::Data<TripService>,
) -> Result<HttpResponse, ApiError> {
    let schedule = service.load(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(schedule))
}

/*
    /api/trips
*/
pub async fn submit(
    service: web::Data<TripService>,
    input: web::Json<TripDraft>,
) -> Result<HttpResponse, ApiError> {
    let response = service.submit(input.into_inner())?;
    if !response.success {
        log::warn!("Trip {} stored without any detail rows", response.trip_id);
    }
    Ok(HttpResponse::Ok().json(response))
}
