pub mod courses;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/v1/courses",
            get(courses::list)
                .post(courses::create)
                .delete(courses::delete),
        )
        .route("/api/v1/course", get(courses::get_by_ids))
}
