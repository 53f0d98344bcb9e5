pub mod health;
pub mod schedule;
pub mod search;
pub mod trip;

use actix_web::web;

/// Register every route. Handlers expect `AppConfig`, `TripService` and
/// `SearchHistory` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/schedule")
                        .route("/seed", web::get().to(schedule::seed))
                        .route("/places", web::post().to(schedule::add_place))
                        .route("/days", web::post().to(schedule::add_day))
                        .route("/remove", web::post().to(schedule::remove))
                        .route("/update", web::post().to(schedule::update))
                        .route(
                            "/normalize-time",
                            web::post().to(schedule::normalize_time),
                        )
                        .route("/serialize", web::post().to(schedule::serialize)),
                )
                .service(
                    web::scope("/trips")
                        .route("", web::post().to(trip::submit))
                        .route("/new", web::get().to(trip::new_draft))
                        .route("/{id}/schedule", web::get().to(trip::get_schedule)),
                )
                .service(
                    web::resource("/search-history")
                        .route(web::get().to(search::list))
                        .route(web::post().to(search::record))
                        .route(web::delete().to(search::clear)),
                ),
        );
}
