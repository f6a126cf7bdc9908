//! Root greeting endpoint.

use actix_web::{get, web};

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Bonjour";

/// Return the greeting as a JSON string.
#[utoipa::path(
    get,
    path = "/",
    tags = ["index"],
    responses((status = 200, description = "Greeting", body = String))
)]
#[get("/")]
pub async fn index() -> web::Json<&'static str> {
    web::Json(GREETING)
}
