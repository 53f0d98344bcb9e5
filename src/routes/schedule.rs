use crate::{
    error::ApiError,
    models::schedule::{EntryPatch, ScheduleList},
    schedule::{editor, persist, time},
};
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScheduleInput {
    pub schedule: ScheduleList,
}

#[derive(Debug, Deserialize)]
pub struct IndexedInput {
    pub schedule: ScheduleList,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInput {
    pub schedule: ScheduleList,
    pub index: usize,
    pub patch: EntryPatch,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TimeInput {
    pub time: Option<String>,
}

/*
    /api/schedule/seed
*/
pub async fn seed() -> impl Responder {
    HttpResponse::Ok().json(ScheduleList::seed())
}

/*
    /api/schedule/places
*/
pub async fn add_place(input: web::Json<IndexedInput>) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let schedule = editor::add_place(&input.schedule, input.index)?;
    Ok(HttpResponse::Ok().json(schedule))
}

/*
    /api/schedule/days
*/
pub async fn add_day(input: web::Json<ScheduleInput>) -> impl Responder {
    HttpResponse::Ok().json(editor::add_schedule(&input.schedule))
}

/*
    /api/schedule/remove
*/
pub async fn remove(input: web::Json<IndexedInput>) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let schedule = editor::remove_schedule(&input.schedule, input.index)?;
    Ok(HttpResponse::Ok().json(schedule))
}

/*
    /api/schedule/update
*/
pub async fn update(input: web::Json<UpdateInput>) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let schedule = editor::update_entry(&input.schedule, input.index, &input.patch)?;
    Ok(HttpResponse::Ok().json(schedule))
}

/*
    /api/schedule/normalize-time
*/
pub async fn normalize_time(input: web::Json<TimeInput>) -> impl Responder {
    HttpResponse::Ok().json(TimeInput {
        time: Some(time::normalize_time(input.time.as_deref())),
    })
}

/*
    /api/schedule/serialize
*/
pub async fn serialize(input: web::Json<ScheduleInput>) -> impl Responder {
    HttpResponse::Ok().json(persist::to_persistable(&input.schedule))
}
