use crate::services::search_history::SearchHistory;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub query: String,
}

/*
    GET /api/search-history
*/
pub async fn list(history: web::Data<SearchHistory>) -> impl Responder {
    HttpResponse::Ok().json(history.list())
}

/*
    POST /api/search-history
*/
pub async fn record(
    history: web::Data<SearchHistory>,
    input: web::Json<SearchInput>,
) -> impl Responder {
    HttpResponse::Ok().json(history.record(&input.query))
}

/*
    DELETE /api/search-history
*/
pub async fn clear(history: web::Data<SearchHistory>) -> impl Responder {
    history.clear();
    HttpResponse::Ok().json(Vec::<String>::new())
}
